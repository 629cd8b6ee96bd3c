//! Gateway serving planned production submodel requests.
//!
//! The decision is linear and its ordering is part of the contract:
//!
//! 1. partner and material identifiers must pass their grammars (else 400);
//! 2. the representation must be `$value` (else 501);
//! 3. the lookup runs; no document, a port error, or a panic inside the
//!    lookup yields 500, a document yields 200.
//!
//! Rejections on every path are reported to the diagnostics port with a
//! reason code. Untrusted representation text is sanitized before it leaves
//! the gateway.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;

use super::ports::{PlannedProductionLookup, PlannedProductionRequests, RequestDiagnostics};
use super::{
    MaterialIdentifier, PartnerIdentifier, PlannedProductionOutput, RequestRejection,
    SanitizedRepresentation, SubmodelRequestValidator,
};

/// Classified outcome of a submodel request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseClass {
    /// Document found; served unchanged.
    Ok(PlannedProductionOutput),
    /// Partner or material identifier was malformed.
    BadRequest,
    /// Lookup produced no document.
    InternalError,
    /// Representation other than `$value` was requested.
    NotImplemented,
}

/// Gateway orchestrating validation, lookup, and outcome classification.
///
/// Holds only shared immutable dependencies, so one instance serves
/// concurrent requests.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use planned_production::domain::ports::{
///     FixturePlannedProductionLookup, NoOpRequestDiagnostics,
/// };
/// use planned_production::domain::{GrammarValidator, PlannedProductionGateway, ResponseClass};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let gateway = PlannedProductionGateway::new(
///     Arc::new(GrammarValidator),
///     Arc::new(FixturePlannedProductionLookup),
///     Arc::new(NoOpRequestDiagnostics),
/// );
/// let outcome = gateway
///     .handle_request("BPNL1234567890AB", "urn:uuid:123e4567-e89b-12d3-a456-426614174000", "json")
///     .await;
/// assert_eq!(outcome, ResponseClass::NotImplemented);
/// # });
/// ```
pub struct PlannedProductionGateway<V: ?Sized, L: ?Sized, D: ?Sized> {
    validator: Arc<V>,
    lookup: Arc<L>,
    diagnostics: Arc<D>,
}

impl<V: ?Sized, L: ?Sized, D: ?Sized> Clone for PlannedProductionGateway<V, L, D> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            lookup: Arc::clone(&self.lookup),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}

impl<V: ?Sized, L: ?Sized, D: ?Sized> PlannedProductionGateway<V, L, D> {
    /// Create a gateway from its collaborators.
    pub fn new(validator: Arc<V>, lookup: Arc<L>, diagnostics: Arc<D>) -> Self {
        Self {
            validator,
            lookup,
            diagnostics,
        }
    }
}

impl<V, L, D> PlannedProductionGateway<V, L, D>
where
    V: SubmodelRequestValidator + ?Sized,
    L: PlannedProductionLookup + ?Sized,
    D: RequestDiagnostics + ?Sized,
{
    /// Validate the raw request fields and classify the outcome.
    pub async fn handle_request(
        &self,
        partner: &str,
        material: &str,
        representation: &str,
    ) -> ResponseClass {
        if !self.identifiers_are_valid(partner, material) {
            self.diagnostics
                .record_rejection(&RequestRejection::malformed_identifier());
            return ResponseClass::BadRequest;
        }

        if !self.validator.is_valid_representation(representation) {
            let sanitized = SanitizedRepresentation::sanitize(representation, self.validator.as_ref());
            self.diagnostics
                .record_rejection(&RequestRejection::unsupported_representation(sanitized));
            return ResponseClass::NotImplemented;
        }

        let partner = PartnerIdentifier::from_validated(partner);
        let material = MaterialIdentifier::from_validated(material);
        match self.lookup(&partner, &material).await {
            Ok(output) => ResponseClass::Ok(output),
            Err(detail) => {
                self.diagnostics
                    .record_rejection(&RequestRejection::lookup_unavailable(detail));
                ResponseClass::InternalError
            }
        }
    }

    fn identifiers_are_valid(&self, partner: &str, material: &str) -> bool {
        self.validator.is_valid_partner_identifier(partner)
            && self.validator.is_valid_material_identifier(material)
    }

    /// Run the lookup, folding absence, port errors, and panics into an
    /// operator-facing detail string.
    async fn lookup(
        &self,
        partner: &PartnerIdentifier,
        material: &MaterialIdentifier,
    ) -> Result<PlannedProductionOutput, String> {
        // Panics raised while the adapter builds its future are caught too.
        let outcome = AssertUnwindSafe(async move {
            self.lookup
                .lookup_planned_production(partner, material)
                .await
        })
        .catch_unwind()
        .await;
        match outcome {
            Ok(Ok(Some(output))) => Ok(output),
            Ok(Ok(None)) => Err(format!("no planned production available for {material}")),
            Ok(Err(error)) => Err(error.to_string()),
            Err(_) => Err("planned production lookup panicked".to_owned()),
        }
    }
}

#[async_trait]
impl<V, L, D> PlannedProductionRequests for PlannedProductionGateway<V, L, D>
where
    V: SubmodelRequestValidator + ?Sized,
    L: PlannedProductionLookup + ?Sized,
    D: RequestDiagnostics + ?Sized,
{
    async fn handle_request(
        &self,
        partner: &str,
        material: &str,
        representation: &str,
    ) -> ResponseClass {
        PlannedProductionGateway::handle_request(self, partner, material, representation).await
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
