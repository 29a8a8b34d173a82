//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the search URL is set before building a `ScrapeConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use url::Url;

use super::types::ScrapeConfig;
use crate::scrape::types::ScrapeRequest;
use crate::utils::{DEFAULT_MAX_CONCURRENT_PAGES, DEFAULT_REQUEST_TIMEOUT_SECS, PAGE_QUERY_PARAM, SITE_ORIGIN};

// Type states for the builder
pub struct WithSearchUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) search_url: Option<String>,
    pub(crate) site_origin: String,
    pub(crate) max_concurrent_pages: usize,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            search_url: None,
            site_origin: SITE_ORIGIN.to_string(),
            max_concurrent_pages: DEFAULT_MAX_CONCURRENT_PAGES,
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn search_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithSearchUrl> {
        ScrapeConfigBuilder {
            search_url: Some(url.into()),
            site_origin: self.site_origin,
            max_concurrent_pages: self.max_concurrent_pages,
            request_timeout_secs: self.request_timeout_secs,
            _phantom: PhantomData,
        }
    }
}

impl<State> ScrapeConfigBuilder<State> {
    /// Override the origin used to resolve relative job-detail links
    #[must_use]
    pub fn site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = origin.into();
        self
    }

    /// Set the worker pool width for the page fan-out (minimum 1)
    #[must_use]
    pub fn max_concurrent_pages(mut self, width: usize) -> Self {
        self.max_concurrent_pages = width;
        self
    }

    /// Set or disable the per-request timeout
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl ScrapeConfigBuilder<WithSearchUrl> {
    /// Validate the configuration and build a `ScrapeConfig`
    ///
    /// # Errors
    ///
    /// Returns an error if the search URL is not an absolute http(s) URL or
    /// already carries the pagination parameter, if the site origin does not
    /// parse, or if the worker width is zero.
    pub fn build(self) -> Result<ScrapeConfig> {
        let search_url = self
            .search_url
            .ok_or_else(|| anyhow!("search URL missing despite typestate"))?;

        let parsed = Url::parse(&search_url)
            .map_err(|e| anyhow!("Invalid search URL '{search_url}': {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Search URL must be http(s), got scheme '{}'",
                parsed.scheme()
            ));
        }
        if parsed.query_pairs().any(|(key, _)| key == PAGE_QUERY_PARAM) {
            return Err(anyhow!(
                "Search URL must not carry the '{PAGE_QUERY_PARAM}' parameter; the pipeline appends it"
            ));
        }

        Url::parse(&self.site_origin)
            .map_err(|e| anyhow!("Invalid site origin '{}': {e}", self.site_origin))?;

        if self.max_concurrent_pages == 0 {
            return Err(anyhow!("max_concurrent_pages must be at least 1"));
        }

        Ok(ScrapeConfig {
            request: ScrapeRequest::new(search_url),
            site_origin: self.site_origin,
            max_concurrent_pages: self.max_concurrent_pages,
            request_timeout_secs: self.request_timeout_secs,
        })
    }
}
