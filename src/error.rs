//! Error types for passkey-origin-validator
//!
//! The decision core (`counter`) never returns these: validation yields an
//! [`AuthenticatorStatus`](crate::counter::AuthenticatorStatus) and the census
//! a populated [`LabelCount`](crate::counter::LabelCount). The errors below
//! belong to the byte sources and the configuration layer around it.

use thiserror::Error;

/// The main error type for passkey-origin-validator operations
#[derive(Error, Debug)]
pub enum Error {
    /// Byte source errors (HTTP fetch, file read)
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a well-known document
#[derive(Error, Debug)]
pub enum SourceError {
    /// The domain could not be turned into a well-known URL
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Building the HTTP client failed
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request itself failed (DNS, connect, TLS, timeout)
    #[error("failed to fetch well-known URL: {0}")]
    Fetch(String),

    /// Reading the response body failed midway
    #[error("failed to read response body: {0}")]
    ReadBody(String),

    /// The document file could not be opened
    #[error("failed to open file: {path}: {message}")]
    OpenFile {
        /// Path that was requested
        path: String,
        /// Underlying error message
        message: String,
    },

    /// The document file could not be read
    #[error("failed to read file: {path}: {message}")]
    ReadFile {
        /// Path that was requested
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Configuration file and environment errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("read config failed: {0}")]
    Read(String),

    /// The config file is not valid YAML for the schema
    #[error("invalid yaml: {0}")]
    InvalidYaml(String),

    /// An environment override could not be parsed
    #[error("invalid value for {name}: {message}")]
    InvalidEnv {
        /// Environment variable name
        name: &'static str,
        /// Parse failure detail
        message: String,
    },

    /// A value is outside its accepted range
    #[error("{0}")]
    OutOfRange(String),
}

/// Result type alias for passkey-origin-validator operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = Error::Source(SourceError::OpenFile {
            path: "missing.json".to_string(),
            message: "No such file or directory".to_string(),
        });
        assert!(err.to_string().contains("failed to open file"));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_invalid_domain() {
        let err = SourceError::InvalidDomain("relative URL without a base".to_string());
        assert_eq!(err.to_string(), "invalid domain: relative URL without a base");
    }

    #[test]
    fn test_config_error() {
        let err = Error::from(ConfigError::InvalidEnv {
            name: "PASSKEY_ORIGIN_VALIDATOR_TIMEOUT_SECS",
            message: "invalid digit found in string".to_string(),
        });
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("PASSKEY_ORIGIN_VALIDATOR_TIMEOUT_SECS"));
    }
}
