use crate::config::types::{Config, OfferConfig, ServerConfig, SourceConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_server_config(&config.server)?;
    validate_offer_config(&config.offer)?;
    Ok(())
}

/// Validates the upstream document settings
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid source url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Source url '{}' must use http or https, got '{}'",
            config.url,
            url.scheme()
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind must be a socket address like 127.0.0.1:3000, got '{}': {}",
            config.bind, e
        ))
    })?;

    Ok(())
}

fn validate_offer_config(config: &OfferConfig) -> Result<(), ConfigError> {
    if config.pool_size < 1 {
        return Err(ConfigError::Validation(format!(
            "pool_size must be >= 1, got {}",
            config.pool_size
        )));
    }

    Ok(())
}
