//! Page-count estimator
//!
//! Fetches page 1 of a search once, reads the total result count the site
//! reports in its heading, counts the job entries actually present, and
//! derives how many pages the fan-out must fetch.

use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::errors::ScrapeError;
use super::fetcher::fetch_html;
use super::page_parser::JOB_ENTRY_SELECTOR;
use super::types::PageEstimate;
use crate::config::ScrapeConfig;
use crate::utils::find_integer_in_text;

static RESULT_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1").expect("BUG: hardcoded CSS selector 'h1' is invalid")
});

/// Fetch the first result page and derive the page count.
///
/// # Errors
///
/// - `ScrapeError::Fetch` — network failure or non-2xx status on page 1
/// - `ScrapeError::Parse` — the page has no `<h1>` heading
/// - `ScrapeError::IntegerExtraction` — the heading contains no digits
///
/// An empty first page is not an error here: it comes back as an estimate
/// with zero pages, which the pipeline reports as an empty result.
pub async fn estimate_pages(
    client: &Client,
    config: &ScrapeConfig,
) -> Result<PageEstimate, ScrapeError> {
    let html = fetch_html(client, config.search_url()).await?;
    estimate_from_html(&html)
}

/// Derive the page count from already-fetched first-page HTML.
pub fn estimate_from_html(html: &str) -> Result<PageEstimate, ScrapeError> {
    let document = Html::parse_document(html);

    let heading = document
        .select(&RESULT_HEADING_SELECTOR)
        .next()
        .ok_or_else(|| ScrapeError::Parse("result page has no <h1> heading".into()))?;
    let heading_text = heading.text().collect::<String>();
    let total_jobs = find_integer_in_text(&heading_text)
        .ok_or_else(|| ScrapeError::IntegerExtraction(heading_text.trim().to_string()))?;

    let jobs_per_page = document.select(&JOB_ENTRY_SELECTOR).count();

    Ok(PageEstimate::new(total_jobs, jobs_per_page))
}
