//! Outcome of a related-origin validation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a WebAuthn related-origin check.
///
/// The rendered tokens match the browser's `AuthenticatorStatus` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticatorStatus {
    /// The caller origin is listed and was reached within the label budget
    Success,
    /// The document is not a `{"origins": [string, ...]}` object
    BadRelyingPartyIdJsonParseError,
    /// The caller origin is not listed
    BadRelyingPartyIdNoJsonMatch,
    /// The caller origin was not reached and at least one label was refused
    BadRelyingPartyIdNoJsonMatchHitLimits,
}

impl AuthenticatorStatus {
    /// Upper-snake-case token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::BadRelyingPartyIdJsonParseError => "BAD_RELYING_PARTY_ID_JSON_PARSE_ERROR",
            Self::BadRelyingPartyIdNoJsonMatch => "BAD_RELYING_PARTY_ID_NO_JSON_MATCH",
            Self::BadRelyingPartyIdNoJsonMatchHitLimits => {
                "BAD_RELYING_PARTY_ID_NO_JSON_MATCH_HIT_LIMITS"
            }
        }
    }

    /// Whether the caller is authorized.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for AuthenticatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
