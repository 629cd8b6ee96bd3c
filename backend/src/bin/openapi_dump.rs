//! Print the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use clap::Parser;
use planned_production::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the planned production OpenAPI document",
    version
)]
struct CliArgs {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(|error| io::Error::other(format!("serialise OpenAPI document: {error}")))?;
    println!("{json}");
    Ok(())
}
