//! Core types for scrape operations
//!
//! This module contains the record type emitted by the pipeline, the
//! immutable request wrapper, and the estimator's page-count output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::page_url;

/// One extracted job listing
///
/// All four fields are present on every emitted record; a field may be the
/// empty string when its sub-extraction failed (a heading without the
/// standalone `at` token yields empty position and company). Serde names
/// match the tabular export column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Date posted")]
    pub date_posted: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// Immutable base search URL for one scrape invocation
///
/// Site and field selection are already encoded into the URL. The pipeline
/// appends the pagination parameter itself; the request never carries one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapeRequest(String);

impl ScrapeRequest {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL for one listing page of this search
    #[must_use]
    pub fn page_url(&self, page: usize) -> String {
        page_url(&self.0, page)
    }
}

impl fmt::Display for ScrapeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page-count estimate derived from the first result page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEstimate {
    /// Total job count the site reports in its result heading
    pub total_jobs: u64,
    /// Number of job entries present on page 1
    pub jobs_per_page: usize,
    /// Number of pages the fan-out will fetch
    pub total_pages: usize,
}

impl PageEstimate {
    /// Derive the page count from the first page's metadata.
    ///
    /// Page count is `total_jobs / jobs_per_page + 1`, the site's observed
    /// pagination arithmetic (one extra page even on exact multiples). An
    /// empty first page would make that a division by zero, so it is guarded
    /// here and reported as zero pages.
    #[must_use]
    pub fn new(total_jobs: u64, jobs_per_page: usize) -> Self {
        let total_pages = if jobs_per_page == 0 {
            0
        } else {
            (total_jobs / jobs_per_page as u64) as usize + 1
        };
        Self {
            total_jobs,
            jobs_per_page,
            total_pages,
        }
    }
}
