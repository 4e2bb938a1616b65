//! passkey-origin-validator - WebAuthn related-origin checks
//!
//! A relying party can publish `/.well-known/webauthn` listing the origins
//! allowed to use its RP ID. Browsers honour that list only up to a budget of
//! five distinct eTLD+1 labels. This crate reproduces that check so a relying
//! party can see how a browser will treat its document.
//!
//! # Architecture
//!
//! ```text
//! CLI ──▶ source (HTTP / file) ──▶ raw JSON bytes
//!                                      │
//!                    ┌─────────────────┴─────────────────┐
//!                    ▼                                   ▼
//!             counter::census                  counter::validate
//!                    │                                   │
//!                    ▼                                   ▼
//!               LabelCount                     AuthenticatorStatus
//!                    │
//!                    ▼
//!          counter::format_results
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use passkey_origin_validator::counter::{census, validate_well_known_json, AuthenticatorStatus};
//!
//! let document = br#"{"origins": ["https://example.com", "https://example.co.uk"]}"#;
//!
//! let status = validate_well_known_json("https://example.co.uk", document);
//! assert_eq!(status, AuthenticatorStatus::Success);
//!
//! let result = census("inline", document);
//! assert_eq!(result.labels_found, vec!["example"]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod counter;
pub mod demo;
pub mod error;
pub mod source;

// Re-exports for convenience
pub use config::Config;
pub use counter::{
    census, format_results, validate_well_known_json, AuthenticatorStatus, LabelCount, MAX_LABELS,
};
pub use error::{Error, Result};
pub use source::{count_labels, count_labels_from_file, SourceOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
