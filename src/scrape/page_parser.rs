//! Per-page HTML parser for job listings
//!
//! Extracts one `JobRecord` per `li.job-info` element. Failure is
//! page-scoped: the first job entry with missing structure (no heading, no
//! date element, no link) discards the whole page's contribution rather
//! than emitting the entries parsed so far. Partially-extractable *text*
//! is different from missing *structure* — a heading without the standalone
//! `at` token still yields a record, with empty position and company.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::errors::ScrapeError;
use super::types::JobRecord;
use crate::utils::{resolve_job_link, text_after_at, text_before_at};

// Parsed once at first access. Hardcoded selectors should never fail to
// parse - if they do, it's a compile-time bug.

pub(crate) static JOB_ENTRY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("li.job-info").expect("BUG: hardcoded CSS selector 'li.job-info' is invalid")
});

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h2").expect("BUG: hardcoded CSS selector 'h2' is invalid")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a").expect("BUG: hardcoded CSS selector 'a' is invalid")
});

static DATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#job-date").expect("BUG: hardcoded CSS selector '#job-date' is invalid")
});

/// Parse all job entries out of one listing page.
///
/// Entry order in the returned list is document order.
///
/// # Errors
///
/// Returns `ScrapeError::Parse` on the first job entry whose expected
/// structure is missing; no records from the page are returned in that case.
pub fn parse_listing_page(html: &str, origin: &str) -> Result<Vec<JobRecord>, ScrapeError> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for entry in document.select(&JOB_ENTRY_SELECTOR) {
        records.push(extract_job(entry, origin)?);
    }

    Ok(records)
}

fn extract_job(entry: ElementRef<'_>, origin: &str) -> Result<JobRecord, ScrapeError> {
    let heading = entry
        .select(&HEADING_SELECTOR)
        .next()
        .ok_or_else(|| ScrapeError::Parse("job entry has no <h2> heading".into()))?;

    let heading_text = heading.text().collect::<String>();
    let heading_text = heading_text.trim();
    let position = text_before_at(heading_text).unwrap_or_default().to_string();
    let company = text_after_at(heading_text).unwrap_or_default().to_string();

    let date_posted = entry
        .select(&DATE_SELECTOR)
        .next()
        .ok_or_else(|| ScrapeError::Parse("job entry has no date element".into()))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let anchor = heading
        .select(&ANCHOR_SELECTOR)
        .next()
        .ok_or_else(|| ScrapeError::Parse("job heading has no link".into()))?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::Parse("job link has no href attribute".into()))?;
    let link = resolve_job_link(origin, href).map_err(|e| ScrapeError::Parse(e.to_string()))?;

    Ok(JobRecord {
        company,
        position,
        date_posted,
        link,
    })
}
