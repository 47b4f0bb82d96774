//! JSON error responses.

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fxreport_core::document::DocumentError;
use fxreport_core::model::ModelError;
use fxreport_core::reports::ReportError;
use fxreport_shared::AppError;
use serde_json::json;
use tracing::{debug, error};

/// An [`AppError`] rendered as `{"error": message, "code": code}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// The underlying application error.
    #[must_use]
    pub const fn inner(&self) -> &AppError {
        &self.0
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        let app = match err {
            ReportError::Validation(e) => AppError::Validation(e.to_string()),
            ReportError::NotConfigured => {
                AppError::Configuration(ReportError::NotConfigured.to_string())
            }
            ReportError::Model(e) => AppError::ExternalService(model_message(&e)),
        };
        Self(app)
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        let app = match err {
            DocumentError::EmptyReport => {
                AppError::Validation(DocumentError::EmptyReport.to_string())
            }
            DocumentError::Render(detail) => {
                AppError::DocumentGeneration(format!("Error generating PDF: {detail}"))
            }
        };
        Self(app)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

/// Credential and quota failures have fixed wording; anything else is prefixed.
fn model_message(err: &ModelError) -> String {
    match err {
        ModelError::Authentication { .. } | ModelError::QuotaExceeded { .. } => err.to_string(),
        ModelError::EmptyResponse { .. } | ModelError::Unavailable { .. } => {
            format!("An error occurred: {err}")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = self.0.error_code();

        if status.is_server_error() {
            error!(code, error = %self.0, "Request failed");
        } else {
            debug!(code, error = %self.0, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": self.0.message(),
                "code": code,
            })),
        )
            .into_response()
    }
}
