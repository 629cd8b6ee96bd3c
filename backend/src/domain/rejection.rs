//! Diagnostic records emitted when a submodel request is not served.
//!
//! Rejections carry an explicit reason code so diagnostics adapters can log
//! or count them without parsing messages. Untrusted request text only ever
//! reaches a rejection through [`SanitizedRepresentation`].

use std::fmt;

use super::validator::SubmodelRequestValidator;

/// Text substituted for representation values that are unsafe to display.
pub const REPLACED_REPRESENTATION: &str = "<REPLACED_INVALID_REPRESENTATION>";

/// Stable machine-readable reason a request was not served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// Partner or material identifier failed its grammar.
    MalformedIdentifier,
    /// Representation segment was not the accepted sentinel.
    UnsupportedRepresentation,
    /// Lookup collaborator produced no document.
    LookupUnavailable,
}

impl RejectionReason {
    /// Reason code used in logs and metric labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedIdentifier => "malformed_identifier",
            Self::UnsupportedRepresentation => "unsupported_representation",
            Self::LookupUnavailable => "lookup_unavailable",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation text that is safe to include in diagnostics.
///
/// ## Invariants
/// - Holds either display-safe caller text or [`REPLACED_REPRESENTATION`].
///
/// # Examples
/// ```
/// use planned_production::domain::{
///     GrammarValidator, REPLACED_REPRESENTATION, SanitizedRepresentation,
/// };
///
/// let kept = SanitizedRepresentation::sanitize("json", &GrammarValidator);
/// assert_eq!(kept.as_str(), "json");
///
/// let replaced = SanitizedRepresentation::sanitize("a\nb", &GrammarValidator);
/// assert_eq!(replaced.as_str(), REPLACED_REPRESENTATION);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedRepresentation {
    text: String,
    replaced: bool,
}

impl SanitizedRepresentation {
    /// Keep `raw` when the validator deems it display safe, otherwise
    /// substitute the placeholder.
    pub fn sanitize<V>(raw: &str, validator: &V) -> Self
    where
        V: SubmodelRequestValidator + ?Sized,
    {
        if validator.is_display_safe(raw) {
            Self {
                text: raw.to_owned(),
                replaced: false,
            }
        } else {
            Self {
                text: REPLACED_REPRESENTATION.to_owned(),
                replaced: true,
            }
        }
    }

    /// Borrow the displayable text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// True when the caller's text was replaced by the placeholder.
    pub fn was_replaced(&self) -> bool {
        self.replaced
    }
}

impl fmt::Display for SanitizedRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic record for a request that was not served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRejection {
    reason: RejectionReason,
    representation: Option<SanitizedRepresentation>,
    detail: Option<String>,
}

impl RequestRejection {
    /// Partner or material identifier was malformed.
    pub fn malformed_identifier() -> Self {
        Self {
            reason: RejectionReason::MalformedIdentifier,
            representation: None,
            detail: None,
        }
    }

    /// Representation segment was not `$value`.
    pub fn unsupported_representation(representation: SanitizedRepresentation) -> Self {
        Self {
            reason: RejectionReason::UnsupportedRepresentation,
            representation: Some(representation),
            detail: None,
        }
    }

    /// Lookup produced nothing; `detail` describes why for operators.
    pub fn lookup_unavailable(detail: impl Into<String>) -> Self {
        Self {
            reason: RejectionReason::LookupUnavailable,
            representation: None,
            detail: Some(detail.into()),
        }
    }

    /// Reason code for this rejection.
    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    /// Sanitized representation, present for unsupported representations.
    pub fn representation(&self) -> Option<&SanitizedRepresentation> {
        self.representation.as_ref()
    }

    /// Operator-facing detail, present for lookup failures.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}
