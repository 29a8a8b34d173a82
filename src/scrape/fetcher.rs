//! HTTP client construction and page fetching
//!
//! One shared `reqwest::Client` serves the whole pipeline; cloning it is
//! cheap and connection pooling happens inside it.

use reqwest::Client;
use std::time::Duration;

use super::errors::ScrapeError;
use crate::config::ScrapeConfig;
use crate::utils::USER_AGENT;

/// Build the HTTP client the pipeline uses for every request.
///
/// # Errors
///
/// Returns `ScrapeError::Fetch` if the TLS backend fails to initialize.
pub fn build_client(config: &ScrapeConfig) -> Result<Client, ScrapeError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = config.request_timeout_secs() {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Fetch one URL and return its body as text.
///
/// # Errors
///
/// Returns `ScrapeError::Fetch` on connection failure, timeout, or a
/// non-2xx status.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
