//! Built-in example documents
//!
//! Runs the census and the validation engine over a few fixed documents and
//! prints each document next to its report. Used by `--example`.

use std::io::{self, Write};

use serde_json::Value;
use tracing::debug;

use crate::counter::{census, format_results, validate_well_known_json, LabelCount};

/// Target shown for example documents.
pub const EXAMPLE_TARGET: &str = "https://example-data/.well-known/webauthn";

/// Three labels, under the limit.
pub const UNDER_LIMIT: &str = r#"{
    "origins": [
        "https://example.com",
        "https://test.example.org",
        "https://another.example.net"
    ]
}"#;

/// Six labels, over the limit.
pub const OVER_LIMIT: &str = r#"{
    "origins": [
        "https://one.example.com",
        "https://two.example.org",
        "https://three.example.net",
        "https://four.example.io",
        "https://five.example.co",
        "https://six.example.dev"
    ]
}"#;

/// Country-code TLDs sharing and splitting labels.
pub const COUNTRY_CODES: &str = r#"{
    "origins": [
        "https://example.co.uk",
        "https://example.de",
        "https://example-rewards.com",
        "https://shop.example.fr",
        "https://blog.example.jp",
        "https://support.example.ca",
        "https://news.example.au"
    ]
}"#;

const COLUMN_GAP: usize = 4;

/// Write the example walkthrough to `out`.
pub fn run_example<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Testing with example data...")?;

    let cases = [
        ("Under the limit (3 labels)", UNDER_LIMIT),
        ("Over the limit (6 labels)", OVER_LIMIT),
        ("ccTLDs (country code top-level domains)", COUNTRY_CODES),
    ];

    for (index, (title, document)) in cases.iter().enumerate() {
        writeln!(out, "\nTest case {}: {}", index + 1, title)?;
        let result = census(EXAMPLE_TARGET, document.as_bytes());
        debug!(
            count = result.count,
            labels = ?result.labels_found,
            exceeds_limit = result.exceeds_limit,
            "example census"
        );
        display_side_by_side(out, document, &result)?;
    }

    let validations = [
        ("Validation (success)", "https://example.com"),
        ("Validation (failure)", "https://unknown.com"),
    ];

    for (offset, (title, caller)) in validations.iter().enumerate() {
        writeln!(out, "\nTest case {}: {}", cases.len() + offset + 1, title)?;
        let result = census(EXAMPLE_TARGET, UNDER_LIMIT.as_bytes());
        display_side_by_side(out, UNDER_LIMIT, &result)?;

        let status = validate_well_known_json(caller, UNDER_LIMIT.as_bytes());
        writeln!(out, "\nValidation Results:")?;
        writeln!(out, "Validating caller origin: {caller}\nStatus: {status}")?;
    }

    Ok(())
}

/// Print a document and its formatted census in two columns.
pub fn display_side_by_side<W: Write>(
    out: &mut W,
    document: &str,
    result: &LabelCount,
) -> io::Result<()> {
    let pretty = normalize_json(document).unwrap_or_else(|| document.to_string());
    let report = format_results(result);

    let left: Vec<&str> = pretty.lines().collect();
    let right: Vec<&str> = report.lines().collect();

    let header_left = "WebAuthn Response";
    let rule_left = "----------------";
    let width = left
        .iter()
        .map(|l| l.chars().count())
        .chain([header_left.len(), rule_left.len()])
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    writeln!(out, "{header_left:<width$}Label Analysis")?;
    writeln!(out, "{rule_left:<width$}-------------")?;

    for row in 0..left.len().max(right.len()) {
        let l = left.get(row).copied().unwrap_or("");
        let r = right.get(row).copied().unwrap_or("");
        writeln!(out, "{}", format!("{l:<width$}{r}").trim_end())?;
    }

    Ok(())
}

/// Re-indent a JSON document; `None` if it does not parse.
fn normalize_json(document: &str) -> Option<String> {
    let value: Value = serde_json::from_str(document).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
