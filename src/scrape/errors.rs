//! Error types for scrape operations
//!
//! Every variant here is recovered inside the pipeline: page-scoped failures
//! degrade to an empty contribution from that page, and a failing first-page
//! estimate degrades to an empty overall result. Nothing in this module
//! reaches the caller as an error; the diagnostic sink is where the detail
//! goes.

use thiserror::Error;

/// Error types for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure: connection, timeout, or non-2xx status
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    /// Expected HTML structure not found
    #[error("{0}")]
    Parse(String),

    /// Result-count heading present but contains no digits
    #[error("no integer found in heading text '{0}'")]
    IntegerExtraction(String),
}

impl ScrapeError {
    /// Whether this failure happened at the network layer.
    ///
    /// The sink distinguishes network errors from parsing errors in its
    /// message prefix; everything else about their handling is identical.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
