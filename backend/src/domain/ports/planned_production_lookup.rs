//! Driven port for fetching planned production submodel documents.
//!
//! The lookup receives identifiers that the gateway has already validated,
//! so implementations never re-check identifier syntax. Absence of a
//! document is a normal `Ok(None)` outcome; infrastructure failures surface
//! as [`PlannedProductionLookupError`]. The gateway maps both to a 500.

use async_trait::async_trait;

use crate::domain::{MaterialIdentifier, PartnerIdentifier, PlannedProductionOutput};

use super::define_port_error;

define_port_error! {
    /// Errors raised while looking up planned production documents.
    pub enum PlannedProductionLookupError {
        /// Backing store could not be reached.
        Connection { message: String } =>
            "planned production lookup connection failed: {message}",
        /// Query failed or returned data that could not be mapped.
        Query { message: String } =>
            "planned production lookup query failed: {message}",
    }
}

/// Port for resolving the planned production document of a material for
/// the requesting partner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlannedProductionLookup: Send + Sync {
    /// Return the document for `material` as seen by `partner`, or `None`
    /// when no document can be produced.
    ///
    /// May be slow; the caller enforces no timeout.
    async fn lookup_planned_production(
        &self,
        partner: &PartnerIdentifier,
        material: &MaterialIdentifier,
    ) -> Result<Option<PlannedProductionOutput>, PlannedProductionLookupError>;
}

/// Fixture lookup used until a snapshot source is configured.
///
/// Always reports absence, so every well-formed request yields 500.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePlannedProductionLookup;

#[async_trait]
impl PlannedProductionLookup for FixturePlannedProductionLookup {
    async fn lookup_planned_production(
        &self,
        _partner: &PartnerIdentifier,
        _material: &MaterialIdentifier,
    ) -> Result<Option<PlannedProductionOutput>, PlannedProductionLookupError> {
        Ok(None)
    }
}
