//! Validation and census tests
//!
//! These cases track the browser's related-origin test suite.

use passkey_origin_validator::counter::{
    census, extract_label, format_results, validate_well_known_json, AuthenticatorStatus,
    PublicSuffixList,
};
use pretty_assertions::assert_eq;

struct Case {
    name: &'static str,
    caller: &'static str,
    json: &'static str,
    expected: AuthenticatorStatus,
}

const CASES: &[Case] = &[
    Case {
        name: "empty json array",
        caller: "https://foo.com",
        json: "[]",
        expected: AuthenticatorStatus::BadRelyingPartyIdJsonParseError,
    },
    Case {
        name: "empty object",
        caller: "https://foo.com",
        json: "{}",
        expected: AuthenticatorStatus::BadRelyingPartyIdJsonParseError,
    },
    Case {
        name: "missing origins key",
        caller: "https://foo.com",
        json: r#"{"foo": "bar"}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdJsonParseError,
    },
    Case {
        name: "origins not an array",
        caller: "https://foo.com",
        json: r#"{"origins": "bar"}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdJsonParseError,
    },
    Case {
        name: "empty origins array",
        caller: "https://foo.com",
        json: r#"{"origins": []}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
    Case {
        name: "origins array with non-string",
        caller: "https://foo.com",
        json: r#"{"origins": [1]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdJsonParseError,
    },
    Case {
        name: "matching origin",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://foo.com"]}"#,
        expected: AuthenticatorStatus::Success,
    },
    Case {
        name: "non-matching origin",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://foo2.com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
    Case {
        name: "bare public suffix",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
    Case {
        name: "different scheme",
        caller: "https://foo.com",
        json: r#"{"origins": ["other://foo.com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
    Case {
        name: "five labels, match last",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://a.com", "https://b.com", "https://c.com", "https://d.com", "https://foo.com"]}"#,
        expected: AuthenticatorStatus::Success,
    },
    Case {
        name: "six labels, match sixth",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://a.com", "https://b.com", "https://c.com", "https://d.com", "https://e.com", "https://foo.com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatchHitLimits,
    },
    Case {
        name: "six labels, match fifth",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://a.com", "https://b.com", "https://c.com", "https://d.com", "https://foo.com", "https://e.com"]}"#,
        expected: AuthenticatorStatus::Success,
    },
    Case {
        name: "same label across tlds",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://foo.co.uk", "https://foo.de", "https://foo.in", "https://foo.net", "https://foo.org", "https://foo.com"]}"#,
        expected: AuthenticatorStatus::Success,
    },
    Case {
        name: "caller host differs only in case",
        caller: "https://FOO.com",
        json: r#"{"origins": ["https://foo.com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
    Case {
        name: "case variants are distinct labels",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://A.com", "https://a.com", "https://b.com", "https://c.com", "https://d.com", "https://foo.com"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatchHitLimits,
    },
    Case {
        name: "explicit default port",
        caller: "https://foo.com",
        json: r#"{"origins": ["https://foo.com:443"]}"#,
        expected: AuthenticatorStatus::BadRelyingPartyIdNoJsonMatch,
    },
];

#[test]
fn test_validate_well_known_json() {
    for case in CASES {
        let status = validate_well_known_json(case.caller, case.json.as_bytes());
        assert_eq!(status, case.expected, "case: {}", case.name);
    }
}

#[test]
fn test_six_labels_without_match_reports_limits() {
    let json = r#"{"origins": ["https://a.com", "https://b.com", "https://c.com",
        "https://d.com", "https://e.com", "https://f.com"]}"#;
    assert_eq!(
        validate_well_known_json("https://zzz.com", json.as_bytes()),
        AuthenticatorStatus::BadRelyingPartyIdNoJsonMatchHitLimits
    );
}

#[test]
fn test_skipped_entries_do_not_spend_budget() {
    let json = r#"{"origins": ["https://localhost", "not a url", "https://a.com",
        "https://b.com", "https://c.com", "https://d.com", "https://foo.com"]}"#;
    assert_eq!(
        validate_well_known_json("https://foo.com", json.as_bytes()),
        AuthenticatorStatus::Success
    );
}

#[test]
fn test_worked_label_examples() {
    let cases = [
        ("example.com", "example"),
        ("test.example.org", "test.example"),
        ("one.thing.com", "one.thing"),
        ("foo.co.uk", "foo"),
    ];
    for (host, label) in cases {
        assert_eq!(
            extract_label(host, &PublicSuffixList).as_deref(),
            Some(label),
            "host: {host}"
        );
    }
}

#[test]
fn test_census_three_labels() {
    let json = br#"{
        "origins": [
            "https://example.com",
            "https://test.example.org",
            "https://another.example.net"
        ]
    }"#;
    let result = census("valid.json", json);
    assert_eq!(result.error_message, None);
    assert_eq!(result.count, 3);
    assert!(!result.exceeds_limit);
    assert_eq!(
        result.labels_found,
        vec!["example", "test.example", "another.example"]
    );
}

#[test]
fn test_census_does_not_gate_labels() {
    let json = br#"{
        "origins": [
            "https://one.example.com",
            "https://two.example.org",
            "https://three.example.net",
            "https://four.example.io",
            "https://five.example.co",
            "https://six.example.dev"
        ]
    }"#;
    let result = census("over.json", json);
    assert_eq!(result.count, 6);
    assert!(result.exceeds_limit);
    assert_eq!(
        result.labels_found,
        vec![
            "one.example",
            "two.example",
            "three.example",
            "four.example",
            "five.example",
            "six.example"
        ]
    );
    assert_eq!(result.unique_labels.len(), 6);
}

#[test]
fn test_census_counts_case_variants_separately() {
    let result = census("mixed.json", br#"{"origins": ["https://Foo.com", "https://foo.com"]}"#);
    assert_eq!(result.count, 2);
    assert_eq!(result.labels_found, vec!["Foo", "foo"]);
}

#[test]
fn test_census_missing_origins_is_an_error() {
    let result = census("empty.json", b"{}");
    let message = result.error_message.expect("error message");
    assert!(message.contains("parse JSON"));
    assert!(result.labels_found.is_empty());
}

#[test]
fn test_formatted_count_round_trip() {
    let json = br#"{"origins": ["https://a.com", "https://b.org", "https://a.net"]}"#;
    let result = census("inline", json);
    let printed = format_results(&result);
    let count: usize = printed
        .lines()
        .find_map(|l| l.strip_prefix("Unique labels found: "))
        .and_then(|n| n.parse().ok())
        .expect("count line");
    assert_eq!(count, result.count);
    assert_eq!(count, 2);
}
