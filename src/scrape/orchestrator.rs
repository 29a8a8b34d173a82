//! Main scrape orchestration logic
//!
//! Coordinates the full pipeline for one invocation:
//! - Page-count estimation from the first result page
//! - Concurrent fetch-and-parse of every page under bounded width
//! - Per-page failure isolation and diagnostic logging
//! - Aggregation into one flat record list
//!
//! The caller gets back a plain `Vec<JobRecord>` — empty when the estimate
//! fails or the search matches nothing. Failure detail goes to the
//! diagnostic sink only; "no data scraped" is indistinguishable from "no
//! matching jobs" by design.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{debug, error, info};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::estimator::estimate_pages;
use super::fetcher::{build_client, fetch_html};
use super::page_parser::parse_listing_page;
use super::types::{JobRecord, ScrapeRequest};
use crate::config::ScrapeConfig;
use crate::diagnostics::DiagnosticSink;

/// Run one complete scrape: estimate the page count, fetch and parse every
/// page concurrently, aggregate the records.
///
/// Records are concatenated in task-completion order, which under real
/// network latency is not the site's page order; within one page's
/// contribution, document order is preserved. Run with
/// `max_concurrent_pages = 1` for deterministic ordering.
///
/// All failures are recovered: a failed page contributes nothing, a failed
/// first-page estimate yields an empty result. Errors are recorded to the
/// sink, never returned.
pub async fn scrape(config: ScrapeConfig, sink: Arc<DiagnosticSink>) -> Vec<JobRecord> {
    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            sink.error(&format!("Network error while fetching total jobs: {e}"));
            error!("failed to build HTTP client: {e}");
            return Vec::new();
        }
    };

    let estimate = match estimate_pages(&client, &config).await {
        Ok(estimate) => estimate,
        Err(e) => {
            if e.is_network() {
                sink.error(&format!("Network error while fetching total jobs: {e}"));
            } else {
                sink.error(&format!("Error finding total jobs: {e}"));
            }
            info!("first-page estimate failed, returning empty result: {e}");
            return Vec::new();
        }
    };

    if estimate.total_pages == 0 {
        sink.error("Error finding total jobs: no job entries on first page");
        info!("search returned no job entries, returning empty result");
        return Vec::new();
    }

    info!(
        "scraping {} pages ({} jobs reported, {} per page)",
        estimate.total_pages, estimate.total_jobs, estimate.jobs_per_page
    );

    // Concurrency control
    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_pages()));
    let mut tasks = FuturesUnordered::new();

    for page in 1..=estimate.total_pages {
        // Dispatch blocks here once the pool is full; permits free up as
        // in-flight tasks finish.
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                error!("semaphore closed unexpectedly");
                break;
            }
        };

        let client = client.clone();
        let request = config.request().clone();
        let origin = config.site_origin().to_string();
        let sink = Arc::clone(&sink);

        tasks.push(tokio::spawn(async move {
            let _permit = permit; // Hold until task completes
            fetch_page_records(&client, &request, &origin, page, &sink).await
        }));
    }

    // Drain in completion order
    let mut records = Vec::new();
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(page_records) => records.extend(page_records),
            Err(e) => error!("page task panicked: {e}"),
        }
    }

    info!("scrape complete: {} records", records.len());
    records
}

/// Fetch and parse one listing page.
///
/// Failure is page-scoped: any fetch or parse error is logged to the sink
/// and the page contributes an empty list, leaving sibling pages untouched.
async fn fetch_page_records(
    client: &Client,
    request: &ScrapeRequest,
    origin: &str,
    page: usize,
    sink: &DiagnosticSink,
) -> Vec<JobRecord> {
    let url = request.page_url(page);

    let html = match fetch_html(client, &url).await {
        Ok(html) => html,
        Err(e) => {
            sink.error(&format!("Network error on page {page}: {e}"));
            debug!("page {page} fetch failed: {e}");
            return Vec::new();
        }
    };

    match parse_listing_page(&html, origin) {
        Ok(records) => {
            debug!("page {page}: {} job entries", records.len());
            records
        }
        Err(e) => {
            sink.error(&format!("Error parsing page {page}: {e}"));
            debug!("page {page} parse failed: {e}");
            Vec::new()
        }
    }
}
