//! HTTP API
//!
//! Serves the pipeline result as JSON:
//!
//! - `GET /api/qualifying-offer` runs a fresh fetch-parse-aggregate sequence
//!   and returns the aggregate, or `500` with `{ "error": message }`
//! - `GET /health` answers without touching the upstream
//!
//! ```no_run
//! # async fn run() -> qualifying_offer::Result<()> {
//! use qualifying_offer::api::{serve, AppState};
//! use qualifying_offer::Config;
//!
//! let config = Config::default();
//! let state = AppState::from_config(&config)?;
//! serve(&config.server.bind, state).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::pipeline::{fetch_qualifying_offer, AggregateResult, Fetcher};
use crate::QoError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Shared, immutable request state
#[derive(Debug, Clone)]
pub struct AppState {
    fetcher: Fetcher,
    pool_size: usize,
}

impl AppState {
    pub fn new(fetcher: Fetcher, pool_size: usize) -> Self {
        Self { fetcher, pool_size }
    }

    /// Builds the state from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self, QoError> {
        let fetcher = Fetcher::new(&config.source)?;
        Ok(Self::new(fetcher, config.offer.pool_size))
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health check response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Failure of a single API request
pub struct ApiError(QoError);

impl From<QoError> for ApiError {
    fn from(error: QoError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Qualifying offer request failed: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/qualifying-offer", get(qualifying_offer_handler))
        .with_state(state)
}

/// Binds the address and serves the API until the process stops
pub async fn serve(bind: &str, state: AppState) -> Result<(), QoError> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn qualifying_offer_handler(
    State(state): State<AppState>,
) -> Result<Json<AggregateResult>, ApiError> {
    let result = fetch_qualifying_offer(&state.fetcher, state.pool_size).await?;
    Ok(Json(result))
}
