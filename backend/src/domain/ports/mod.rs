//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod planned_production_lookup;
mod planned_production_requests;
mod request_diagnostics;

#[cfg(test)]
pub use planned_production_lookup::MockPlannedProductionLookup;
pub use planned_production_lookup::{
    FixturePlannedProductionLookup, PlannedProductionLookup, PlannedProductionLookupError,
};
#[cfg(test)]
pub use planned_production_requests::MockPlannedProductionRequests;
pub use planned_production_requests::PlannedProductionRequests;
#[cfg(test)]
pub use request_diagnostics::MockRequestDiagnostics;
pub use request_diagnostics::{NoOpRequestDiagnostics, RequestDiagnostics};
