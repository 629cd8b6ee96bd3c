//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::PlannedProductionRequests;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub planned_production: Arc<dyn PlannedProductionRequests>,
}

impl HttpState {
    /// Construct state from the planned production use-case port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use planned_production::domain::ports::{
    ///     FixturePlannedProductionLookup, NoOpRequestDiagnostics,
    /// };
    /// use planned_production::domain::{GrammarValidator, PlannedProductionGateway};
    /// use planned_production::inbound::http::state::HttpState;
    ///
    /// let gateway = PlannedProductionGateway::new(
    ///     Arc::new(GrammarValidator),
    ///     Arc::new(FixturePlannedProductionLookup),
    ///     Arc::new(NoOpRequestDiagnostics),
    /// );
    /// let state = HttpState::new(Arc::new(gateway));
    /// let _requests = state.planned_production.clone();
    /// ```
    pub fn new(planned_production: Arc<dyn PlannedProductionRequests>) -> Self {
        Self { planned_production }
    }
}
