//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed decorators for domain ports, compiled only with the
//! `metrics` feature.

mod prometheus_rejections;

pub use prometheus_rejections::PrometheusRequestDiagnostics;
