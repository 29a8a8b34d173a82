//! End-to-end pipeline tests against a mock server
//!
//! The estimator hits the base search URL; the fan-out then fetches
//! `&currentpage=N` for every page including page 1, so each test mocks the
//! base URL plus one endpoint per page.

mod common;

use common::{create_error_mock, create_page_mock, listing_page, page_entries, test_config, test_sink};
use jobscrape::{JobRecord, scrape};

/// Mock a full 5-page search (45 jobs, 10 per page) and return the base URL.
/// `fail_page` swaps that page's mock for a 500. The returned mocks must stay
/// alive for the duration of the test; dropping one deregisters it.
async fn mock_five_pages(
    server: &mut mockito::Server,
    fail_page: Option<usize>,
) -> (String, Vec<mockito::Mock>) {
    let heading = "45 Jobs Found";
    let first_page = listing_page(heading, &page_entries(1, 10));
    let mut mocks = vec![create_page_mock(server, "/search/jobs?field=test", &first_page).await];

    for page in 1..=5 {
        let path = format!("/search/jobs?field=test&currentpage={page}");
        if fail_page == Some(page) {
            mocks.push(create_error_mock(server, &path, 500).await);
            continue;
        }
        let count = if page == 5 { 5 } else { 10 };
        let html = listing_page(heading, &page_entries(page, count));
        mocks.push(create_page_mock(server, &path, &html).await);
    }

    (format!("{}/search/jobs?field=test", server.url()), mocks)
}

fn sorted_links(records: &[JobRecord]) -> Vec<String> {
    let mut links: Vec<String> = records.iter().map(|r| r.link.clone()).collect();
    links.sort();
    links
}

#[tokio::test]
async fn aggregates_all_pages() {
    let mut server = mockito::Server::new_async().await;
    let (base_url, _mocks) = mock_five_pages(&mut server, None).await;
    let (_dir, _log, sink) = test_sink();

    let records = scrape(test_config(&base_url, 10), sink).await;

    assert_eq!(records.len(), 45);
    // every record fully populated
    for record in &records {
        assert!(!record.position.is_empty());
        assert!(!record.company.is_empty());
        assert!(!record.date_posted.is_empty());
        assert!(record.link.starts_with("https://www.myjobmag.co.ke/job/"));
    }
}

#[tokio::test]
async fn failed_page_is_dropped_and_siblings_survive() {
    let mut server = mockito::Server::new_async().await;
    let (base_url, _mocks) = mock_five_pages(&mut server, Some(3)).await;
    let (_dir, log_path, sink) = test_sink();

    let records = scrape(test_config(&base_url, 10), sink).await;

    // pages 1,2,4,5 contribute 10+10+10+5
    assert_eq!(records.len(), 35);
    assert!(
        records.iter().all(|r| !r.link.contains("/job/3")),
        "page 3 records must be absent"
    );

    let log = std::fs::read_to_string(&log_path).expect("read log");
    assert!(log.contains("Network error on page 3"), "log was: {log}");
}

#[tokio::test]
async fn record_content_is_deterministic_across_runs() {
    let mut server = mockito::Server::new_async().await;
    let (base_url, _mocks) = mock_five_pages(&mut server, Some(3)).await;
    let (_dir, _log, sink) = test_sink();

    let first = scrape(test_config(&base_url, 10), sink.clone()).await;
    let second = scrape(test_config(&base_url, 10), sink).await;

    // cross-page order may differ between runs; content must not
    assert_eq!(sorted_links(&first), sorted_links(&second));
}

#[tokio::test]
async fn pages_contribute_contiguous_internally_ordered_blocks() {
    let mut server = mockito::Server::new_async().await;
    let (base_url, _mocks) = mock_five_pages(&mut server, None).await;
    let (_dir, _log, sink) = test_sink();

    let records = scrape(test_config(&base_url, 1), sink).await;
    assert_eq!(records.len(), 45);

    // each page's block lands intact: position "Engineer {page}-{n}" must be
    // contiguous per page and ascending by n within the page
    let mut seen_pages: Vec<&str> = Vec::new();
    let mut last_n_in_page = 0usize;
    for record in &records {
        let tag = record.position.strip_prefix("Engineer ").expect("tagged position");
        let (page, n) = tag.split_once('-').expect("page-n tag");
        let n: usize = n.parse().expect("numeric n");
        match seen_pages.last() {
            Some(&current) if current == page => {
                assert!(n > last_n_in_page, "within-page order broken at {tag}");
            }
            _ => {
                assert!(
                    !seen_pages.contains(&page),
                    "page {page} contributed a non-contiguous block"
                );
                seen_pages.push(page);
            }
        }
        last_n_in_page = n;
    }
}

#[tokio::test]
async fn empty_search_returns_empty_without_raising() {
    let mut server = mockito::Server::new_async().await;
    let html = listing_page("0 Jobs Found", &[]);
    let _mock = create_page_mock(&mut server, "/search/jobs?field=test", &html).await;
    let (_dir, log_path, sink) = test_sink();

    let base_url = format!("{}/search/jobs?field=test", server.url());
    let records = scrape(test_config(&base_url, 10), sink).await;

    assert!(records.is_empty());
    let log = std::fs::read_to_string(&log_path).expect("read log");
    assert!(log.contains("Error finding total jobs"), "log was: {log}");
}

#[tokio::test]
async fn first_page_fetch_failure_yields_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _mock = create_error_mock(&mut server, "/search/jobs?field=test", 500).await;
    let (_dir, log_path, sink) = test_sink();

    let base_url = format!("{}/search/jobs?field=test", server.url());
    let records = scrape(test_config(&base_url, 10), sink).await;

    assert!(records.is_empty());
    let log = std::fs::read_to_string(&log_path).expect("read log");
    assert!(
        log.contains("Network error while fetching total jobs"),
        "log was: {log}"
    );
}

#[tokio::test]
async fn first_page_parse_failure_yields_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _mock = create_page_mock(
        &mut server,
        "/search/jobs?field=test",
        "<html><body><p>maintenance</p></body></html>",
    )
    .await;
    let (_dir, log_path, sink) = test_sink();

    let base_url = format!("{}/search/jobs?field=test", server.url());
    let records = scrape(test_config(&base_url, 10), sink).await;

    assert!(records.is_empty());
    let log = std::fs::read_to_string(&log_path).expect("read log");
    assert!(log.contains("Error finding total jobs"), "log was: {log}");
}

#[tokio::test]
async fn malformed_page_contributes_nothing_but_run_completes() {
    let mut server = mockito::Server::new_async().await;
    let heading = "20 Jobs Found";
    let first_page = listing_page(heading, &page_entries(1, 10));
    let broken = listing_page(
        heading,
        &[r#"<li class="job-info"><h2><a href="/job/9">Broken at Beta</a></h2></li>"#.to_string()],
    );
    // page 2: entries present but structurally broken (no date element)
    let _mocks = [
        create_page_mock(&mut server, "/search/jobs?field=test", &first_page).await,
        create_page_mock(&mut server, "/search/jobs?field=test&currentpage=1", &first_page).await,
        create_page_mock(&mut server, "/search/jobs?field=test&currentpage=2", &broken).await,
        create_page_mock(
            &mut server,
            "/search/jobs?field=test&currentpage=3",
            &listing_page(heading, &[]),
        )
        .await,
    ];
    let (_dir, log_path, sink) = test_sink();

    let base_url = format!("{}/search/jobs?field=test", server.url());
    let records = scrape(test_config(&base_url, 10), sink).await;

    assert_eq!(records.len(), 10, "only page 1's block survives");
    let log = std::fs::read_to_string(&log_path).expect("read log");
    assert!(log.contains("Error parsing page 2"), "log was: {log}");
}
