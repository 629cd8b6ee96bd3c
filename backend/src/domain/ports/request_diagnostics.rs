//! Driven port for recording why requests were not served.
//!
//! Keeps the gateway independent of any logging or metrics backend.
//! Implementations may log, count, or discard rejections.

use crate::domain::RequestRejection;

/// Sink for structured rejection diagnostics.
///
/// Recording must not fail the request, so the method is infallible.
#[cfg_attr(test, mockall::automock)]
pub trait RequestDiagnostics: Send + Sync {
    /// Record a single rejection.
    fn record_rejection(&self, rejection: &RequestRejection);
}

/// Diagnostics sink that discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpRequestDiagnostics;

impl RequestDiagnostics for NoOpRequestDiagnostics {
    fn record_rejection(&self, _rejection: &RequestRejection) {}
}
