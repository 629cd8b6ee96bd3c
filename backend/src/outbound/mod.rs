//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **lookup**: snapshot-backed planned production documents
//! - **diagnostics**: rejection records written through `tracing`
//! - **metrics**: Prometheus counters (feature-gated)
//!
//! Adapters are thin translators between domain types and infrastructure.
//! They contain no business logic.

pub mod diagnostics;
pub mod lookup;
#[cfg(feature = "metrics")]
pub mod metrics;
