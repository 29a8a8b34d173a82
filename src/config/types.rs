//! Core configuration types for scrape pipelines
//!
//! This module contains the main `ScrapeConfig` struct that defines the
//! parameters for one scrape invocation.

use serde::{Deserialize, Serialize};

use crate::scrape::types::ScrapeRequest;

/// Main configuration struct for a scrape pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Base search URL for the scrape.
    ///
    /// **INVARIANT:** Carries no pagination parameter (validated in builder).
    /// The pipeline appends the page number itself, so a base URL that
    /// already names a page would fetch the same page N times.
    pub(crate) request: ScrapeRequest,

    /// Origin used to resolve relative job-detail links
    pub(crate) site_origin: String,

    /// Worker pool width for the page fan-out
    ///
    /// Bounds in-flight page fetches. Width 1 degrades to sequential
    /// fetching with deterministic page ordering.
    pub(crate) max_concurrent_pages: usize,

    /// Per-request timeout in seconds
    ///
    /// `None` disables the timeout; a hung request then occupies its worker
    /// slot until the connection drops.
    pub(crate) request_timeout_secs: Option<u64>,
}
