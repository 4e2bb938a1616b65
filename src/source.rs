//! Document byte sources
//!
//! Loads a `.well-known/webauthn` document over HTTP or from disk and hands
//! the bytes to the label census. Both sources cap the body size; the HTTP
//! source also bounds the request duration.
//!
//! Failures that leave nothing to inspect (bad domain, connection refused,
//! missing file) are returned as [`SourceError`]. Responses that arrived but
//! cannot be counted (non-200 status, wrong content type, malformed JSON)
//! come back as a [`LabelCount`] carrying an error message.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::counter::{census, LabelCount, MAX_BODY_SIZE, TIMEOUT, WELL_KNOWN_PATH};
use crate::error::{Result, SourceError};

/// Limits applied by the byte sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    /// HTTP request timeout
    pub timeout: Duration,
    /// Maximum number of body bytes read
    pub max_body_size: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            timeout: TIMEOUT,
            max_body_size: MAX_BODY_SIZE,
        }
    }
}

impl From<&Config> for SourceOptions {
    fn from(config: &Config) -> Self {
        Self {
            timeout: config.timeout(),
            max_body_size: config.max_body_size,
        }
    }
}

/// Build the well-known URL for a domain.
///
/// `https://` is assumed when the domain carries no `http`/`https` scheme.
/// Any path on the input is dropped; an explicit port is kept.
pub fn well_known_url(domain: &str) -> std::result::Result<Url, SourceError> {
    let with_scheme = if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };

    let parsed =
        Url::parse(&with_scheme).map_err(|e| SourceError::InvalidDomain(e.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| SourceError::InvalidDomain(format!("no host in {domain}")))?;
    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Url::parse(&format!("{}://{}{}", parsed.scheme(), authority, WELL_KNOWN_PATH))
        .map_err(|e| SourceError::InvalidDomain(e.to_string()))
}

/// Fetch a domain's well-known document and take its label census.
#[instrument(skip(options))]
pub async fn count_labels(domain: &str, options: &SourceOptions) -> Result<LabelCount> {
    let url = well_known_url(domain)?;
    let target = url.to_string();
    info!(url = %target, "fetching well-known document");

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(|e| SourceError::Client(e.to_string()))?;

    let mut response = client.get(url).send().await.map_err(SourceError::from)?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(url = %target, status = status.as_u16(), "unexpected HTTP status");
        return Ok(LabelCount::error(
            target,
            format!("HTTP request failed with status code: {}", status.as_u16()),
            "",
        ));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.contains("application/json") {
        warn!(url = %target, content_type = %content_type, "unexpected content type");
        return Ok(LabelCount::error(
            target,
            format!("unexpected content type: {content_type}"),
            "",
        ));
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| SourceError::ReadBody(e.to_string()))?
    {
        let remaining = remaining_budget(body.len(), options.max_body_size);
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            debug!(url = %target, limit = options.max_body_size, "body truncated at size cap");
            break;
        }
        body.extend_from_slice(&chunk);
    }

    debug!(url = %target, bytes = body.len(), "document received");
    Ok(census(&target, &body))
}

/// Read a local document and take its label census.
#[instrument(skip(options))]
pub fn count_labels_from_file(path: &Path, options: &SourceOptions) -> Result<LabelCount> {
    let target = path.display().to_string();
    info!(path = %target, "reading document from file");

    let file = File::open(path).map_err(|e| SourceError::OpenFile {
        path: target.clone(),
        message: e.to_string(),
    })?;

    let mut body = Vec::new();
    file.take(options.max_body_size)
        .read_to_end(&mut body)
        .map_err(|e| SourceError::ReadFile {
            path: target.clone(),
            message: e.to_string(),
        })?;

    debug!(path = %target, bytes = body.len(), "document read");
    Ok(census(&target, &body))
}

fn remaining_budget(read: usize, limit: u64) -> usize {
    usize::try_from(limit)
        .unwrap_or(usize::MAX)
        .saturating_sub(read)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_url_adds_scheme() {
        assert_eq!(
            well_known_url("webauthn.io").unwrap().as_str(),
            "https://webauthn.io/.well-known/webauthn"
        );
    }

    #[test]
    fn test_well_known_url_keeps_http_and_port() {
        assert_eq!(
            well_known_url("http://127.0.0.1:8080/some/path").unwrap().as_str(),
            "http://127.0.0.1:8080/.well-known/webauthn"
        );
    }

    #[test]
    fn test_well_known_url_rejects_garbage() {
        assert!(matches!(
            well_known_url("https://"),
            Err(SourceError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            timeout_secs: 3,
            max_body_size: 4096,
            ..Config::default()
        };
        let options = SourceOptions::from(&config);
        assert_eq!(options.timeout, Duration::from_secs(3));
        assert_eq!(options.max_body_size, 4096);
    }

    #[test]
    fn test_remaining_budget() {
        assert_eq!(remaining_budget(0, 10), 10);
        assert_eq!(remaining_budget(8, 10), 2);
        assert_eq!(remaining_budget(12, 10), 0);
    }
}
