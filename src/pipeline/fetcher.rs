//! HTTP fetcher for the salary document
//!
//! This module performs the one effectful step of the pipeline:
//! - Building an HTTP client that never serves a cached copy
//! - A single GET per invocation, no retries
//! - Classifying failures into transport and status errors

use crate::config::SourceConfig;
use crate::QoError;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// Builds an HTTP client with caching disabled
///
/// Every request carries `Cache-Control: no-cache` and `Pragma: no-cache` so
/// intermediaries revalidate with the origin. No timeout is configured beyond
/// the transport defaults.
///
/// # Arguments
///
/// * `user_agent` - The user agent string sent with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the salary document from a fixed URL
///
/// The fetcher is immutable after construction and cheap to clone, so a server
/// can share one across requests while each call still hits the live document.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    /// Creates a fetcher for the configured source
    pub fn new(config: &SourceConfig) -> Result<Self, QoError> {
        let client = build_http_client(&config.user_agent).map_err(QoError::HttpClient)?;
        Ok(Self::with_client(client, config.url.clone()))
    }

    /// Creates a fetcher from an existing client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The document URL this fetcher reads
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the raw document body
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The response body as text
    /// * `Err(QoError::Fetch)` - The server answered with a non-success status
    /// * `Err(QoError::Transport)` - The request or the body read failed
    pub async fn fetch(&self) -> Result<String, QoError> {
        tracing::debug!("Fetching salary document from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Salary document returned HTTP {}", status.as_u16());
            return Err(QoError::Fetch {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;

        tracing::debug!("Fetched {} bytes", body.len());
        Ok(body)
    }

    fn transport_error(&self, source: reqwest::Error) -> QoError {
        if source.is_timeout() {
            tracing::warn!("Request to {} timed out", self.url);
        } else if source.is_connect() {
            tracing::warn!("Connection to {} failed", self.url);
        }

        QoError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}
