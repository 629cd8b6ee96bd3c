//! Identifier grammars and validated identifier newtypes.
//!
//! Purpose: hold the fixed regular languages shared across the data space
//! (business partner numbers, cross-company material numbers, and the
//! "display safe" text grammar used for diagnostics) and the newtypes that
//! prove a value has already passed them.
//!
//! Every grammar is anchored to the whole input, so partial matches are
//! rejected. Matching is total: any string, including empty strings and
//! strings containing control characters, yields `true` or `false`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Legal-entity business partner number, e.g. `BPNL1234567890AB`.
const PARTNER_PATTERN: &str = r"^BPNL[0-9A-Za-z]{12}$";

/// A URN (`urn:<nid>:<nss>`) or a bare 8-4-4-4-12 hexadecimal UUID.
const MATERIAL_PATTERN: &str = concat!(
    r"^(?:",
    r"(?i:urn):[A-Za-z0-9][A-Za-z0-9-]{0,31}:[A-Za-z0-9()+,\-.:=@;$_!*'%/?#]+",
    r"|",
    r"[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}",
    r")$",
);

/// Non-empty text without control characters or line/paragraph separators.
const DISPLAY_SAFE_PATTERN: &str = r"^[^\p{Cc}\x{2028}\x{2029}]+$";

/// Lazily compiled grammar.
///
/// A pattern that fails to compile matches nothing, keeping every predicate
/// total. The unit tests assert each pattern compiles.
struct Grammar {
    pattern: &'static str,
    compiled: OnceLock<Option<Regex>>,
}

impl Grammar {
    const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            compiled: OnceLock::new(),
        }
    }

    fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern).ok())
            .as_ref()
    }

    fn matches(&self, candidate: &str) -> bool {
        self.regex().is_some_and(|regex| regex.is_match(candidate))
    }
}

static PARTNER_GRAMMAR: Grammar = Grammar::new(PARTNER_PATTERN);
static MATERIAL_GRAMMAR: Grammar = Grammar::new(MATERIAL_PATTERN);
static DISPLAY_SAFE_GRAMMAR: Grammar = Grammar::new(DISPLAY_SAFE_PATTERN);

/// Return true when `candidate` is a complete business partner number.
///
/// # Examples
/// ```
/// use planned_production::domain::identifiers::matches_partner_grammar;
///
/// assert!(matches_partner_grammar("BPNL1234567890AB"));
/// assert!(!matches_partner_grammar("BPNL1234567890AB "));
/// ```
pub fn matches_partner_grammar(candidate: &str) -> bool {
    PARTNER_GRAMMAR.matches(candidate)
}

/// Return true when `candidate` is a complete URN or UUID.
///
/// # Examples
/// ```
/// use planned_production::domain::identifiers::matches_material_grammar;
///
/// assert!(matches_material_grammar("urn:uuid:123e4567-e89b-12d3-a456-426614174000"));
/// assert!(matches_material_grammar("123e4567-e89b-12d3-a456-426614174000"));
/// assert!(!matches_material_grammar("MNR-7307-AU340474.001"));
/// ```
pub fn matches_material_grammar(candidate: &str) -> bool {
    MATERIAL_GRAMMAR.matches(candidate)
}

/// Return true when `candidate` may be echoed verbatim in diagnostics.
pub fn matches_display_safe_grammar(candidate: &str) -> bool {
    DISPLAY_SAFE_GRAMMAR.matches(candidate)
}

/// Validation errors returned by the identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierValidationError {
    /// Value is not a business partner number.
    #[error("partner identifier must be a BPNL business partner number")]
    MalformedPartner,
    /// Value is neither a URN nor a UUID.
    #[error("material identifier must be a URN or UUID")]
    MalformedMaterial,
}

/// Business partner number of the calling data-space partner.
///
/// ## Invariants
/// - Matches the BPNL grammar in full.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartnerIdentifier(String);

impl PartnerIdentifier {
    /// Validate and construct a [`PartnerIdentifier`].
    ///
    /// # Examples
    /// ```
    /// use planned_production::domain::PartnerIdentifier;
    ///
    /// let partner = PartnerIdentifier::new("BPNL1234567890AB").expect("valid BPNL");
    /// assert_eq!(partner.as_str(), "BPNL1234567890AB");
    /// assert!(PartnerIdentifier::new("BPNS1234567890AB").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let raw = value.into();
        if !matches_partner_grammar(&raw) {
            return Err(IdentifierValidationError::MalformedPartner);
        }
        Ok(Self(raw))
    }

    /// Wrap a value the caller has already checked with a request validator.
    pub(crate) fn from_validated(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PartnerIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PartnerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PartnerIdentifier> for String {
    fn from(value: PartnerIdentifier) -> Self {
        value.0
    }
}

impl TryFrom<String> for PartnerIdentifier {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Cross-company material number (`materialnumbercx`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterialIdentifier(String);

impl MaterialIdentifier {
    /// Validate and construct a [`MaterialIdentifier`].
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let raw = value.into();
        if !matches_material_grammar(&raw) {
            return Err(IdentifierValidationError::MalformedMaterial);
        }
        Ok(Self(raw))
    }

    pub(crate) fn from_validated(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for MaterialIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MaterialIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MaterialIdentifier> for String {
    fn from(value: MaterialIdentifier) -> Self {
        value.0
    }
}

impl TryFrom<String> for MaterialIdentifier {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
