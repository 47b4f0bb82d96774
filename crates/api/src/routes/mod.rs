//! API route definitions.

use axum::Router;
use axum::http::Uri;
use fxreport_shared::AppError;

use crate::AppState;
use crate::error::ApiError;

pub mod health;
pub mod index;
pub mod reports;

/// Creates the router with all routes.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::routes())
        .merge(health::routes())
        .merge(reports::routes())
}

/// JSON 404 for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::NotFound(format!("No route for {}", uri.path())).into()
}
