//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Human-readable status line.
    pub message: &'static str,
    /// Whether a model API key is configured.
    pub model_configured: bool,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler. Always healthy; configuration is reported, not enforced.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Currency Report App is running",
        model_configured: state.generator.is_configured(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
