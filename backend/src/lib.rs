//! Planned production submodel service library.
//!
//! The domain core validates requests and classifies outcomes; adapters under
//! [`inbound`] and [`outbound`] connect it to actix-web, `tracing`, snapshot
//! files, and Prometheus.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
