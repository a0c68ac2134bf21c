//! Recipient-list parsing.
//!
//! Callers hand recipients over either as one comma-separated string or as
//! a list of addresses; everything below the entry-point boundary works on
//! a single ordered `Vec<String>`. Order is preserved and duplicates are
//! allowed.

use once_cell::sync::Lazy;
use regex::Regex;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("address regex is valid"));

/// Syntactic plausibility only; deliverability is the provider's problem.
#[must_use]
pub fn is_plausible_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Split a comma-separated address list, trimming whitespace and dropping
/// empty segments. `"a@x.com, b@x.com"` → `["a@x.com", "b@x.com"]`.
#[must_use]
pub fn split_address_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}
