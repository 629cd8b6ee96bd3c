//! Builders wiring domain ports into the shared HTTP state.

use std::sync::Arc;

use actix_web::web;

use planned_production::domain::ports::{
    FixturePlannedProductionLookup, PlannedProductionLookup, RequestDiagnostics,
};
use planned_production::domain::{GrammarValidator, PlannedProductionGateway};
use planned_production::inbound::http::state::HttpState;
use planned_production::outbound::diagnostics::TracingRequestDiagnostics;
#[cfg(feature = "metrics")]
use planned_production::outbound::metrics::PrometheusRequestDiagnostics;

use super::ServerConfig;

/// Select the configured lookup, falling back to the fixture that reports
/// absence for every request.
pub(super) fn build_lookup(config: &ServerConfig) -> Arc<dyn PlannedProductionLookup> {
    config
        .lookup
        .clone()
        .unwrap_or_else(|| Arc::new(FixturePlannedProductionLookup))
}

/// Build the diagnostics sink, counting rejections in `registry`.
///
/// # Errors
/// Returns [`std::io::Error`] if Prometheus metric registration fails.
#[cfg(feature = "metrics")]
pub(super) fn build_diagnostics(
    registry: &prometheus::Registry,
) -> std::io::Result<Arc<dyn RequestDiagnostics>> {
    let diagnostics = PrometheusRequestDiagnostics::new(
        registry,
        Arc::new(TracingRequestDiagnostics),
    )
    .map_err(|e| std::io::Error::other(format!("rejection metrics registration failed: {e}")))?;
    Ok(Arc::new(diagnostics))
}

/// Build the diagnostics sink writing rejections through `tracing`.
#[cfg(not(feature = "metrics"))]
pub(super) fn build_diagnostics() -> Arc<dyn RequestDiagnostics> {
    Arc::new(TracingRequestDiagnostics)
}

/// Build the shared HTTP state around a grammar-validating gateway.
pub(super) fn build_http_state(
    lookup: Arc<dyn PlannedProductionLookup>,
    diagnostics: Arc<dyn RequestDiagnostics>,
) -> web::Data<HttpState> {
    let gateway = PlannedProductionGateway::new(Arc::new(GrammarValidator), lookup, diagnostics);
    web::Data::new(HttpState::new(Arc::new(gateway)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planned_production::domain::ports::NoOpRequestDiagnostics;
    use planned_production::domain::{
        MaterialIdentifier, PartnerIdentifier, PlannedProductionOutput, ResponseClass,
    };
    use planned_production::outbound::lookup::InMemoryPlannedProductionLookup;
    use rstest::rstest;
    use std::net::SocketAddr;

    const PARTNER: &str = "BPNL1234567890AB";
    const MATERIAL: &str = "urn:uuid:123e4567-e89b-12d3-a456-426614174000";

    fn config() -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    async fn classify(config: &ServerConfig) -> ResponseClass {
        let state = build_http_state(build_lookup(config), Arc::new(NoOpRequestDiagnostics));
        state
            .planned_production
            .handle_request(PARTNER, MATERIAL, "$value")
            .await
    }

    #[rstest]
    #[tokio::test]
    async fn missing_lookup_falls_back_to_fixture() {
        assert_eq!(classify(&config()).await, ResponseClass::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn configured_lookup_serves_documents() {
        let output = PlannedProductionOutput::new(MATERIAL, Vec::new());
        let lookup = InMemoryPlannedProductionLookup::default()
            .with_document(
                PartnerIdentifier::new(PARTNER).expect("valid partner"),
                MaterialIdentifier::new(MATERIAL).expect("valid material"),
                output.clone(),
            )
            .expect("unique entry");

        let outcome = classify(&config().with_lookup(Arc::new(lookup))).await;

        assert_eq!(outcome, ResponseClass::Ok(output));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn diagnostics_registration_fails_on_duplicate_counter() {
        let registry = prometheus::Registry::new();
        assert!(build_diagnostics(&registry).is_ok());
        assert!(build_diagnostics(&registry).is_err());
    }
}
