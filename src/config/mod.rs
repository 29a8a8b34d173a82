//! Configuration module for scrape pipelines
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring a scrape with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithSearchUrl};
pub use types::ScrapeConfig;
