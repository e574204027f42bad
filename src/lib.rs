//! Moisson: dated catalog snapshots of a paginated listing site
//!
//! This crate implements a single-pass scraper for a used-equipment dealer
//! site. It walks the paginated listing, collects unique product links,
//! extracts a fixed set of labeled fields from every product page, and
//! writes the result as a dated CSV file.

pub mod client;
pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for moisson operations
#[derive(Debug, Error)]
pub enum MoissonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by the HTTP client
///
/// Every variant carries the URL that was being fetched, so callers can
/// decide whether a failure is fatal to the whole run or only to one item.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Retries exhausted for {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last: String,
    },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Result type alias for moisson operations
pub type Result<T> = std::result::Result<T, MoissonError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::{FetchedPage, HttpClient};
pub use config::Config;
pub use record::{ProductRecord, COLUMNS};
pub use scrape::{run_snapshot, RunSummary};
