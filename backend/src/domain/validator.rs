//! Request validation gate for submodel requests.
//!
//! The validator is a set of pure predicates. It performs no I/O and never
//! panics; malformed input simply evaluates to `false`. The gateway receives
//! a validator through its constructor so alternative grammars can be
//! injected without touching the dispatch logic.

use super::identifiers::{
    matches_display_safe_grammar, matches_material_grammar, matches_partner_grammar,
};

/// The only representation token this endpoint serves.
pub const REPRESENTATION_VALUE: &str = "$value";

/// Syntactic checks applied to untrusted request fields.
pub trait SubmodelRequestValidator: Send + Sync {
    /// True iff `candidate` fully matches the partner identifier grammar.
    fn is_valid_partner_identifier(&self, candidate: &str) -> bool;

    /// True iff `candidate` fully matches the URN-or-UUID grammar.
    fn is_valid_material_identifier(&self, candidate: &str) -> bool;

    /// True iff `candidate` is exactly [`REPRESENTATION_VALUE`].
    fn is_valid_representation(&self, candidate: &str) -> bool;

    /// True iff `candidate` may be echoed in diagnostics.
    fn is_display_safe(&self, candidate: &str) -> bool;
}

/// Validator backed by the fixed data-space grammars.
///
/// # Examples
/// ```
/// use planned_production::domain::{GrammarValidator, SubmodelRequestValidator};
///
/// let validator = GrammarValidator;
/// assert!(validator.is_valid_representation("$value"));
/// assert!(!validator.is_valid_representation("$Value"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GrammarValidator;

impl SubmodelRequestValidator for GrammarValidator {
    fn is_valid_partner_identifier(&self, candidate: &str) -> bool {
        matches_partner_grammar(candidate)
    }

    fn is_valid_material_identifier(&self, candidate: &str) -> bool {
        matches_material_grammar(candidate)
    }

    fn is_valid_representation(&self, candidate: &str) -> bool {
        candidate == REPRESENTATION_VALUE
    }

    fn is_display_safe(&self, candidate: &str) -> bool {
        matches_display_safe_grammar(candidate)
    }
}
