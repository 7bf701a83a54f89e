//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ImageDecoder, PageFetcher};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub decoder: Arc<ImageDecoder>,
    pub fetcher: Arc<PageFetcher>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ImageDecoder> {
    fn from_ref(state: &AppState) -> Self {
        state.decoder.clone()
    }
}

impl FromRef<AppState> for Arc<PageFetcher> {
    fn from_ref(state: &AppState) -> Self {
        state.fetcher.clone()
    }
}

/// Create application state from configuration.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let decoder = Arc::new(
        ImageDecoder::new(config.analysis.max_upload_bytes, config.analysis.size)
            .with_max_pixels(config.analysis.max_pixels),
    );
    let fetcher = Arc::new(
        PageFetcher::new(&config.fetch)
            .map_err(|e| anyhow::anyhow!("Failed to create page fetcher: {e}"))?,
    );

    Ok(AppState {
        config: Arc::new(config),
        decoder,
        fetcher,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    // Leave headroom over the configured limit so oversized uploads reach
    // the decoder and get a JSON error instead of a bare 413
    let upload_limit = state.config.analysis.max_upload_bytes.saturating_add(1024);

    Router::new()
        // Engine endpoints
        .route("/api/contrast", post(api::handle_contrast))
        .route("/api/suggest", post(api::handle_suggest))
        .route("/api/analyze", post(api::handle_analyze))
        .route("/api/simulate", post(api::handle_simulate))
        .route(
            "/api/palette",
            post(api::handle_palette).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/website", post(api::handle_website))
        // JSON-RPC shim
        .route("/rpc", post(api::handle_rpc))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .fallback(handle_not_found)
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}
