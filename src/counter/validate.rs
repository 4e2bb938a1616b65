//! Related-origin authorization
//!
//! Scans the listed origins in order while admitting at most [`MAX_LABELS`]
//! distinct labels. An entry whose label would exceed the budget is refused
//! and never compared, so a caller listed after the budget is spent is not
//! authorized even though it appears in the document.

use tracing::{debug, trace};

use super::census::LabelSet;
use super::document::{Origin, OriginList};
use super::label::{extract_label, PublicSuffixList, SuffixLookup};
use super::status::AuthenticatorStatus;
use super::MAX_LABELS;

/// Validate `caller_origin` against `raw` using the compiled-in Public Suffix List.
pub fn validate_well_known_json(caller_origin: &str, raw: &[u8]) -> AuthenticatorStatus {
    validate_with(caller_origin, raw, &PublicSuffixList)
}

/// Validate `caller_origin` against `raw` with a caller-supplied suffix lookup.
pub fn validate_with(
    caller_origin: &str,
    raw: &[u8],
    lookup: &dyn SuffixLookup,
) -> AuthenticatorStatus {
    let list = match OriginList::parse(raw) {
        Ok(list) => list,
        Err(err) => {
            debug!(error = %err, "relying party document did not parse");
            return AuthenticatorStatus::BadRelyingPartyIdJsonParseError;
        }
    };

    let Some(caller) = Origin::parse(caller_origin) else {
        debug!(caller = caller_origin, "caller origin did not parse");
        return AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch;
    };

    let mut seen = LabelSet::new();
    let mut hit_limits = false;

    for entry in list.iter() {
        let Some(origin) = Origin::parse(entry) else {
            continue;
        };
        let Some(label) = extract_label(origin.domain(), lookup) else {
            continue;
        };

        if !seen.contains(&label) {
            if seen.len() >= MAX_LABELS {
                trace!(origin = entry, label = %label, "label refused, budget spent");
                hit_limits = true;
                continue;
            }
            seen.insert(label);
        }

        if origin.same_origin(&caller) {
            return AuthenticatorStatus::Success;
        }
    }

    if hit_limits {
        AuthenticatorStatus::BadRelyingPartyIdNoJsonMatchHitLimits
    } else {
        AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch
    }
}
