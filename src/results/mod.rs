//! Shared result types and cross-provider aggregation helpers

mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strip markup tags from snippet text
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").trim().to_string()
}

/// Deduplicate results by URL, preserving first-seen order.
///
/// Results without a non-empty absolute URL are dropped. Earlier entries win
/// on collision, so callers that append providers in registration order get
/// registration-order precedence for free.
pub fn dedup_by_url(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .filter(|r| r.has_absolute_url() && seen.insert(r.url.clone()))
        .collect()
}
