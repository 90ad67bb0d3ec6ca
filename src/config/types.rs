use crate::pipeline::QUALIFYING_OFFER_POOL;
use serde::Deserialize;

/// The league salary dataset the qualifying offer is computed from
pub const DEFAULT_DATA_URL: &str = "https://questionnaire-148920.appspot.com/swe/data.html";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub offer: OfferConfig,
}

/// Upstream salary document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL of the HTML document holding the salary table
    #[serde(default = "default_url")]
    pub url: String,

    /// User agent sent with every fetch
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// HTTP API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Qualifying offer computation settings
#[derive(Debug, Clone, Deserialize)]
pub struct OfferConfig {
    /// Number of top salaries averaged into the offer
    #[serde(rename = "pool-size", default = "default_pool_size")]
    pub pool_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_user_agent() -> String {
    format!("qualifying-offer/{}", env!("CARGO_PKG_VERSION"))
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_pool_size() -> usize {
    QUALIFYING_OFFER_POOL
}
