//! Shared configuration constants for jobscrape
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default worker pool width: 10 concurrent page fetches
///
/// Matches the fan-out the target site comfortably tolerates. Page fetches
/// are independent, so the width only bounds in-flight requests; it never
/// changes the aggregated result.
///
/// Users can adjust via `max_concurrent_pages`:
/// - Increase for fast connections and large result sets
/// - Set to 1 for fully deterministic page ordering (useful in tests)
pub const DEFAULT_MAX_CONCURRENT_PAGES: usize = 10;

/// Default per-request timeout: 30 seconds
///
/// A hung page fetch otherwise occupies a worker slot for the whole run.
/// Set the config field to `None` to disable the timeout entirely.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Origin used to resolve relative job-detail links into absolute URLs
pub const SITE_ORIGIN: &str = "https://www.myjobmag.co.ke";

/// Query parameter the site uses for pagination
///
/// Appended by the core as `&currentpage=N`; callers supply base search URLs
/// without it.
pub const PAGE_QUERY_PARAM: &str = "currentpage";

/// User agent sent with every page request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; jobscrape/0.1; +https://github.com/jobscrape/jobscrape)";
