//! eTLD+1 label extraction
//!
//! A label is what remains of a host once its public suffix (and the dot in
//! front of it) is removed: `test.example.org` -> `test.example`,
//! `foo.co.uk` -> `foo`. The browser budget counts these labels, so
//! `foo.com` and `foo.de` spend the same slot.

/// Longest-public-suffix lookup.
///
/// Implementations return the longest suffix of `domain` that is registered
/// as a public suffix, or `None` when nothing matches.
pub trait SuffixLookup: Send + Sync {
    /// Longest public suffix of `domain`, if any.
    fn public_suffix<'a>(&self, domain: &'a str) -> Option<&'a str>;
}

/// Lookup backed by the Public Suffix List compiled into the `psl` crate.
///
/// Unlisted top-level domains fall back to their last label, the same
/// implicit `*` rule browsers apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixLookup for PublicSuffixList {
    fn public_suffix<'a>(&self, domain: &'a str) -> Option<&'a str> {
        psl::suffix_str(domain)
    }
}

/// Extract the eTLD+1 label of `host`.
///
/// Returns `None` for hosts without a dot; callers drop such origins from
/// the label set without treating them as errors. When the lookup knows no
/// suffix the whole host (minus a trailing dot) is the label.
pub fn extract_label(host: &str, lookup: &dyn SuffixLookup) -> Option<String> {
    if !host.contains('.') {
        return None;
    }

    let suffix = lookup.public_suffix(host).unwrap_or("");
    let stripped = host.strip_suffix(suffix).unwrap_or(host);
    let label = stripped.strip_suffix('.').unwrap_or(stripped);

    Some(label.to_string())
}
