//! Qualifying Offer: the MLB qualifying offer calculator
//!
//! This crate fetches the league salary table, extracts every valid salary row,
//! ranks the salaries and averages the top 125 into the qualifying offer.

pub mod api;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod salary;

use thiserror::Error;

/// Main error type for qualifying offer operations
#[derive(Debug, Error)]
pub enum QoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The upstream could not be reached (DNS, connect, timeout, reset)
    #[error("Failed to fetch data from {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    /// The upstream answered with a non-success status
    #[error("Failed to fetch data (status {status})")]
    Fetch { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

/// Result type alias for qualifying offer operations
pub type Result<T> = std::result::Result<T, QoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{
    aggregate, extract_players, fetch_qualifying_offer, AggregateResult, Fetcher, PlayerRecord,
    QUALIFYING_OFFER_POOL,
};
