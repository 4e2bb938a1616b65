//! Configuration
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. a YAML file (`--config <path>`, or `~/.passkey-origin-validator.yaml`
//!    when it exists),
//! 2. environment variables,
//! 3. command-line flags (applied by the binary).
//!
//! # Environment Variables
//!
//! - `PASSKEY_ORIGIN_VALIDATOR_DEBUG`: `true`/`1` enables debug logging
//! - `PASSKEY_ORIGIN_VALIDATOR_DEFAULT_DOMAIN`: domain used when none is given
//! - `PASSKEY_ORIGIN_VALIDATOR_TIMEOUT_SECS`: HTTP timeout (1-120)
//! - `PASSKEY_ORIGIN_VALIDATOR_MAX_BODY_SIZE`: document size cap in bytes

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::counter::{MAX_BODY_SIZE, TIMEOUT};
use crate::error::ConfigError;

/// File name looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".passkey-origin-validator.yaml";

/// Domain queried when none is given on the command line.
pub const DEFAULT_DOMAIN: &str = "https://webauthn.io";

const ENV_DEBUG: &str = "PASSKEY_ORIGIN_VALIDATOR_DEBUG";
const ENV_DEFAULT_DOMAIN: &str = "PASSKEY_ORIGIN_VALIDATOR_DEFAULT_DOMAIN";
const ENV_TIMEOUT_SECS: &str = "PASSKEY_ORIGIN_VALIDATOR_TIMEOUT_SECS";
const ENV_MAX_BODY_SIZE: &str = "PASSKEY_ORIGIN_VALIDATOR_MAX_BODY_SIZE";

/// Runtime configuration, threaded explicitly into every operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Verbose diagnostics
    #[serde(default)]
    pub debug: bool,

    /// Domain used when none is given
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Document size cap in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            default_domain: default_domain(),
            timeout_secs: default_timeout_secs(),
            max_body_size: default_max_body_size(),
        }
    }
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.into()
}
fn default_timeout_secs() -> u64 {
    TIMEOUT.as_secs()
}
fn default_max_body_size() -> u64 {
    MAX_BODY_SIZE
}

impl Config {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=120).contains(&self.timeout_secs) {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be between 1 and 120".into(),
            ));
        }
        if !(1024..=16 * 1024 * 1024).contains(&self.max_body_size) {
            return Err(ConfigError::OutOfRange(
                "max_body_size must be between 1024 and 16777216".into(),
            ));
        }
        if self.default_domain.trim().is_empty() {
            return Err(ConfigError::OutOfRange(
                "default_domain must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// HTTP timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration the way the binary does.
    ///
    /// An explicit `path` must exist. Without one, the home-directory file is
    /// read if present. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = match path {
            Some(path) => load_from_file(path)?,
            None => match home_config_path().filter(|p| p.is_file()) {
                Some(path) => load_from_file(&path)?,
                None => Config::default(),
            },
        };

        config.apply_env(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DEBUG) {
            self.debug = matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
        if let Some(value) = lookup(ENV_DEFAULT_DOMAIN) {
            self.default_domain = value;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    name: ENV_TIMEOUT_SECS,
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup(ENV_MAX_BODY_SIZE) {
            self.max_body_size = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    name: ENV_MAX_BODY_SIZE,
                    message: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}

/// Read and validate a YAML config file.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
    let config = load_from_str(&s)?;
    debug!(path = %path.display(), "using config file");
    Ok(config)
}

/// Parse and validate YAML config text.
pub fn load_from_str(s: &str) -> Result<Config, ConfigError> {
    // An empty document means "all defaults".
    if s.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config =
        serde_yaml::from_str(s).map_err(|e| ConfigError::InvalidYaml(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
}
