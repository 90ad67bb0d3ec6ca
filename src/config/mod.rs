//! Configuration module for the qualifying offer calculator
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the defaults
//! that point at the league salary dataset.
//!
//! # Example
//!
//! ```no_run
//! use qualifying_offer::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("qualifying-offer.toml")).unwrap();
//! println!("Salary dataset: {}", config.source.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OfferConfig, ServerConfig, SourceConfig, DEFAULT_DATA_URL};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
