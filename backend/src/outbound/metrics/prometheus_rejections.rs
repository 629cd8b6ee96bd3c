//! Prometheus adapter counting rejected planned production requests.
//!
//! Wraps another diagnostics sink so rejections are both counted and
//! forwarded (usually to the tracing adapter).

use std::sync::Arc;

use prometheus::{CounterVec, Opts, Registry};

use crate::domain::RequestRejection;
use crate::domain::ports::RequestDiagnostics;

/// Prometheus-backed rejection counter.
///
/// # Metric Specification
///
/// - **Name**: `planned_production_rejections_total`
/// - **Type**: Counter
/// - **Labels**:
///   - `reason`: `malformed_identifier`, `unsupported_representation`, or
///     `lookup_unavailable`
pub struct PrometheusRequestDiagnostics {
    rejections_total: CounterVec,
    inner: Arc<dyn RequestDiagnostics>,
}

impl PrometheusRequestDiagnostics {
    /// Register the counter with `registry` and forward records to `inner`.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric cannot be registered (e.g., if a metric
    /// with the same name already exists in the registry).
    pub fn new(
        registry: &Registry,
        inner: Arc<dyn RequestDiagnostics>,
    ) -> Result<Self, prometheus::Error> {
        let rejections_total = CounterVec::new(
            Opts::new(
                "planned_production_rejections_total",
                "Planned production requests not served, by reason",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(rejections_total.clone()))?;
        Ok(Self {
            rejections_total,
            inner,
        })
    }
}

impl RequestDiagnostics for PrometheusRequestDiagnostics {
    fn record_rejection(&self, rejection: &RequestRejection) {
        self.rejections_total
            .with_label_values(&[rejection.reason().as_str()])
            .inc();
        self.inner.record_rejection(rejection);
    }
}
