//! Domain core for the planned production submodel endpoint.
//!
//! Purpose: validate untrusted submodel requests and classify their outcome
//! without depending on any transport, logging backend, or data store. Those
//! concerns sit behind the traits in [`ports`].
//!
//! Public surface:
//! - `SubmodelRequestValidator` / `GrammarValidator`: request validation gate.
//! - `PlannedProductionGateway`: orchestration and `ResponseClass` mapping.
//! - `PartnerIdentifier` / `MaterialIdentifier`: validated identifiers.
//! - `PlannedProductionOutput`: the submodel document served on success.
//! - `RequestRejection`: structured diagnostics with a reason code.

pub mod gateway;
pub mod identifiers;
pub mod planned_production;
pub mod ports;
pub mod rejection;
pub mod trace_id;
pub mod validator;

pub use self::gateway::{PlannedProductionGateway, ResponseClass};
pub use self::identifiers::{IdentifierValidationError, MaterialIdentifier, PartnerIdentifier};
pub use self::planned_production::{
    AllocatedPlannedProductionOutput, ItemQuantity, OrderPositionReference, PlannedProductionOutput,
    Position,
};
pub use self::rejection::{
    REPLACED_REPRESENTATION, RejectionReason, RequestRejection, SanitizedRepresentation,
};
pub use self::trace_id::TraceId;
pub use self::validator::{GrammarValidator, REPRESENTATION_VALUE, SubmodelRequestValidator};
