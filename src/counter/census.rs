//! Label census
//!
//! Enumerates every distinct label in a document. Unlike validation there is
//! no caller to match and no admission gate: the census records everything
//! and only compares the final count against [`MAX_LABELS`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::document::{Origin, OriginList};
use super::label::{extract_label, PublicSuffixList, SuffixLookup};
use super::MAX_LABELS;

/// Distinct labels with their first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl LabelSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label; returns `true` if it was not present.
    pub fn insert(&mut self, label: String) -> bool {
        if self.seen.contains(&label) {
            return false;
        }
        self.seen.insert(label.clone());
        self.order.push(label);
        true
    }

    /// Membership test.
    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no label has been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Labels in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Split into the membership set and the ordered list.
    pub fn into_parts(self) -> (HashSet<String>, Vec<String>) {
        (self.seen, self.order)
    }
}

/// Census of the labels found in a well-known document.
///
/// Either `error_message` is set and the label fields are empty, or the
/// label fields are populated and `error_message` is `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelCount {
    /// Well-known URL or file path the document came from
    pub target: String,
    /// Distinct labels
    #[serde(skip)]
    pub unique_labels: HashSet<String>,
    /// Number of distinct labels
    pub count: usize,
    /// Whether `count` exceeds [`MAX_LABELS`]
    pub exceeds_limit: bool,
    /// Distinct labels in first-seen order
    pub labels_found: Vec<String>,
    /// Why no census could be taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Document text, kept for follow-up validation
    #[serde(skip)]
    pub raw_json: String,
}

impl LabelCount {
    /// A result carrying only an error message.
    pub fn error(
        target: impl Into<String>,
        message: impl Into<String>,
        raw_json: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            error_message: Some(message.into()),
            raw_json: raw_json.into(),
            ..Self::default()
        }
    }

    /// A result built from a completed label set.
    pub fn from_labels(
        target: impl Into<String>,
        labels: LabelSet,
        raw_json: impl Into<String>,
    ) -> Self {
        let count = labels.len();
        let (unique_labels, labels_found) = labels.into_parts();
        Self {
            target: target.into(),
            unique_labels,
            count,
            exceeds_limit: count > MAX_LABELS,
            labels_found,
            error_message: None,
            raw_json: raw_json.into(),
        }
    }

    /// Whether the census could not be taken.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Take a census of `raw` using the compiled-in Public Suffix List.
pub fn census(target: &str, raw: &[u8]) -> LabelCount {
    census_with(target, raw, &PublicSuffixList)
}

/// Take a census of `raw` with a caller-supplied suffix lookup.
pub fn census_with(target: &str, raw: &[u8], lookup: &dyn SuffixLookup) -> LabelCount {
    let raw_json = String::from_utf8_lossy(raw).into_owned();

    let list = match OriginList::parse(raw) {
        Ok(list) => list,
        Err(err) => {
            debug!(location = %target, error = %err, "document did not parse");
            return LabelCount::error(target, format!("failed to parse JSON: {err}"), raw_json);
        }
    };

    let mut labels = LabelSet::new();
    for entry in list.iter() {
        let Some(origin) = Origin::parse(entry) else {
            continue;
        };
        let Some(label) = extract_label(origin.domain(), lookup) else {
            continue;
        };
        labels.insert(label);
    }

    debug!(
        location = %target,
        origins = list.len(),
        labels = labels.len(),
        "label census complete"
    );

    LabelCount::from_labels(target, labels, raw_json)
}
