//! Getter methods for `ScrapeConfig`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use super::types::ScrapeConfig;
use crate::scrape::types::ScrapeRequest;

impl ScrapeConfig {
    #[must_use]
    pub fn request(&self) -> &ScrapeRequest {
        &self.request
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        self.request.as_str()
    }

    #[must_use]
    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    #[must_use]
    pub fn max_concurrent_pages(&self) -> usize {
        self.max_concurrent_pages
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> Option<u64> {
        self.request_timeout_secs
    }
}
