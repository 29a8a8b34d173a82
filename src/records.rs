//! Record filtering helpers
//!
//! Pure data operations over scraped records; rendering is the caller's
//! concern. Date filtering is a case-sensitive substring match against the
//! free-text date field (the source pages use strings like "Posted 2 days
//! ago", so no date arithmetic applies). Position search is
//! case-insensitive.

use crate::scrape::JobRecord;

/// Keep records whose date text contains `date`.
#[must_use]
pub fn filter_by_date(records: &[JobRecord], date: &str) -> Vec<JobRecord> {
    records
        .iter()
        .filter(|record| record.date_posted.contains(date))
        .cloned()
        .collect()
}

/// Keep records whose position contains `term`, ignoring case.
#[must_use]
pub fn search_by_position(records: &[JobRecord], term: &str) -> Vec<JobRecord> {
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.position.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
