//! Diagnostics adapters recording why requests were not served.

mod tracing_diagnostics;

pub use tracing_diagnostics::TracingRequestDiagnostics;
