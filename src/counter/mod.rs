//! Label counting and origin validation for `.well-known/webauthn` documents
//!
//! This module is the decision core. It works on raw document bytes and
//! plain strings, performs no I/O, and mirrors the related-origin check a
//! browser applies before honouring a WebAuthn request from a foreign origin.
//!
//! - [`label`] - eTLD+1 label extraction over a public-suffix lookup
//! - [`document`] - strict parsing of the `{"origins": [...]}` document
//! - [`validate`] - the authorization engine and its label budget
//! - [`census`] - diagnostic enumeration of every distinct label
//! - [`format`] - human-readable rendering of a census

pub mod census;
pub mod document;
pub mod format;
pub mod label;
pub mod status;
pub mod validate;

use std::time::Duration;

pub use census::{census, census_with, LabelCount, LabelSet};
pub use document::{DocumentError, Origin, OriginList};
pub use format::format_results;
pub use label::{extract_label, PublicSuffixList, SuffixLookup};
pub use status::AuthenticatorStatus;
pub use validate::{validate_well_known_json, validate_with};

/// Maximum number of distinct labels a relying party may claim.
pub const MAX_LABELS: usize = 5;

/// Path of the related-origins document relative to the relying party host.
pub const WELL_KNOWN_PATH: &str = "/.well-known/webauthn";

/// Default cap on the document body, in bytes (256 KiB).
pub const MAX_BODY_SIZE: u64 = 1 << 18;

/// Default timeout for fetching the document.
pub const TIMEOUT: Duration = Duration::from_secs(10);
