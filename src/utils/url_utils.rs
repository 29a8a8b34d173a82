//! URL construction utilities for paginated listing scrapes.

use anyhow::Result;
use url::Url;

use super::constants::PAGE_QUERY_PARAM;

/// Resolve a job-detail href against the site origin.
///
/// Listing pages carry root-relative hrefs (`/job/12345/...`); absolute hrefs
/// pass through unchanged.
pub fn resolve_job_link(origin: &str, href: &str) -> Result<String> {
    let base = Url::parse(origin).map_err(|e| anyhow::anyhow!("Invalid site origin: {e}"))?;
    let resolved = base
        .join(href)
        .map_err(|e| anyhow::anyhow!("Failed to resolve link '{href}': {e}"))?;
    Ok(resolved.into())
}

/// Build the URL for one listing page.
///
/// The site paginates with a plain query parameter appended to the base
/// search URL, which already carries its own query string.
#[must_use]
pub fn page_url(base_url: &str, page: usize) -> String {
    format!("{base_url}&{PAGE_QUERY_PARAM}={page}")
}
