//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The report, download, health and index routes
//! - Conversion of pipeline errors into JSON responses

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use fxreport_core::reports::ReportGenerator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report pipeline.
    pub generator: Arc<ReportGenerator>,
}

impl AppState {
    /// Wraps a generator for sharing across handlers.
    #[must_use]
    pub fn new(generator: ReportGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::app_routes())
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
