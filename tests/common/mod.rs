//! Test utilities and helper functions for the jobscrape test suite

use mockito::{Mock, Server};
use std::sync::Arc;

use jobscrape::{DiagnosticSink, ScrapeConfig};

/// One job entry in the site's listing markup
#[allow(dead_code)]
pub fn job_entry(heading: &str, date: &str, href: &str) -> String {
    format!(
        r#"<li class="job-info">
  <h2><a href="{href}">{heading}</a></h2>
  <ul class="job-meta"><li id="job-date">{date}</li></ul>
</li>"#
    )
}

/// A full listing page: result-count heading plus job entries
#[allow(dead_code)]
pub fn listing_page(heading: &str, entries: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Job Search</title>
</head>
<body>
    <h1>{heading}</h1>
    <ul class="job-list">
{}
    </ul>
</body>
</html>"#,
        entries.join("\n")
    )
}

/// `count` distinct well-formed entries for one page, tagged so links are
/// unique across pages
#[allow(dead_code)]
pub fn page_entries(page: usize, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| {
            job_entry(
                &format!("Engineer {page}-{n} at Acme {n}"),
                &format!("Posted {n} days ago"),
                &format!("/job/{page}{n:03}/engineer"),
            )
        })
        .collect()
}

/// Mock one GET endpoint returning HTML; `path_and_query` includes the query
/// string, so the base search URL and each paginated URL get separate mocks.
#[allow(dead_code)]
pub async fn create_page_mock(server: &mut Server, path_and_query: &str, html: &str) -> Mock {
    server
        .mock("GET", path_and_query)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Mock one GET endpoint returning a server error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path_and_query: &str, status: usize) -> Mock {
    server
        .mock("GET", path_and_query)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Config pointed at a mock server's search URL
#[allow(dead_code)]
pub fn test_config(base_url: &str, width: usize) -> ScrapeConfig {
    ScrapeConfig::builder()
        .search_url(base_url)
        .max_concurrent_pages(width)
        .build()
        .expect("Failed to create test config")
}

/// Diagnostic sink backed by a temp directory; keep the `TempDir` alive for
/// the duration of the test
#[allow(dead_code)]
pub fn test_sink() -> (tempfile::TempDir, std::path::PathBuf, Arc<DiagnosticSink>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scraping_errors.log");
    let sink = Arc::new(DiagnosticSink::open(&path).expect("open sink"));
    (dir, path, sink)
}
