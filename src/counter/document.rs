//! Parsing of the `.well-known/webauthn` document and its origins

use serde_json::Value;
use http::Uri;
use thiserror::Error;

/// Ways a document can fail to be an origin list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Not valid JSON
    #[error("{0}")]
    Syntax(String),

    /// Valid JSON, but the top-level value is not an object
    #[error("top-level value is not an object")]
    NotAnObject,

    /// The object has no `origins` key
    #[error("missing `origins` key")]
    MissingOrigins,

    /// `origins` is present but is not an array
    #[error("`origins` is not an array")]
    OriginsNotArray,

    /// `origins` holds a value that is not a string
    #[error("`origins[{index}]` is not a string")]
    NonStringOrigin {
        /// Position of the offending element
        index: usize,
    },
}

/// The `origins` array of a well-known document, in listed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginList {
    origins: Vec<String>,
}

impl OriginList {
    /// Parse raw document bytes.
    ///
    /// Only the `origins` key is read; other keys are ignored.
    pub fn parse(raw: &[u8]) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|e| DocumentError::Syntax(e.to_string()))?;

        let object = value.as_object().ok_or(DocumentError::NotAnObject)?;
        let entries = object
            .get("origins")
            .ok_or(DocumentError::MissingOrigins)?
            .as_array()
            .ok_or(DocumentError::OriginsNotArray)?;

        let origins = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or(DocumentError::NonStringOrigin { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { origins })
    }

    /// Origin strings as written.
    pub fn as_slice(&self) -> &[String] {
        &self.origins
    }

    /// Iterate over the origin strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    /// Number of listed origins, parseable or not.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

/// Scheme and host of a parsed origin.
///
/// Both are kept as written: `host` is the authority without userinfo and
/// keeps any port, default or not (`example.com:443`); `domain` is the bare
/// host used for label extraction. Letter case is never folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    domain: String,
    host: String,
}

impl Origin {
    /// Parse an origin string, returning `None` when it has no scheme or no
    /// usable host.
    pub fn parse(input: &str) -> Option<Self> {
        let uri: Uri = input.parse().ok()?;
        let scheme = uri.scheme_str()?.to_ascii_lowercase();
        let authority = uri.authority()?;

        let domain = authority.host();
        if domain.is_empty() {
            return None;
        }
        let host = match authority.as_str().rsplit_once('@') {
            Some((_, host)) => host,
            None => authority.as_str(),
        };

        Some(Self {
            scheme,
            domain: domain.to_string(),
            host: host.to_string(),
        })
    }

    /// URL scheme (`https`).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host without port.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Host with port, exactly as written.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Exact scheme and host comparison.
    pub fn same_origin(&self, other: &Origin) -> bool {
        self.scheme == other.scheme && self.host == other.host
    }
}
