//! Diagnostics adapter writing rejections as structured `tracing` events.
//!
//! Client-side rejections are logged at `warn`; lookup failures at `error`.
//! The representation field only ever carries sanitized text.

use tracing::{error, warn};

use crate::domain::ports::RequestDiagnostics;
use crate::domain::{RejectionReason, RequestRejection, TraceId};

/// `RequestDiagnostics` implementation backed by the global tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestDiagnostics;

impl RequestDiagnostics for TracingRequestDiagnostics {
    fn record_rejection(&self, rejection: &RequestRejection) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        let reason = rejection.reason().as_str();
        match rejection.reason() {
            RejectionReason::MalformedIdentifier => warn!(
                reason,
                trace_id = trace_id.as_deref(),
                "rejected planned production request with malformed identifier"
            ),
            RejectionReason::UnsupportedRepresentation => warn!(
                reason,
                representation = rejection.representation().map(|r| r.as_str()),
                trace_id = trace_id.as_deref(),
                "rejected planned production request with unsupported representation"
            ),
            RejectionReason::LookupUnavailable => error!(
                reason,
                detail = rejection.detail(),
                trace_id = trace_id.as_deref(),
                "planned production lookup produced no document"
            ),
        }
    }
}
