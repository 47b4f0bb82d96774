//! Report routes.
//!
//! `POST /generate_report` runs the pipeline for a form submission and
//! `POST /download_pdf` renders a previously generated report.

use axum::{
    Form, Json, Router,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use fxreport_core::document::{ReportDocument, download_filename, render_pdf};
use fxreport_core::reports::{DATE_FORMAT, RawReportRequest, ReportResult};
use fxreport_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate_report", post(generate_report))
        .route("/download_pdf", post(download_pdf))
}

/// Response for a generated report.
#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    /// Always true; failures use the error body.
    pub success: bool,
    /// Report text.
    pub report: String,
    /// Currency pair code.
    pub currency: String,
    /// Period start.
    pub start_date: String,
    /// Period end.
    pub end_date: String,
    /// Model identifier that produced the text.
    pub model: String,
}

impl From<ReportResult> for GenerateReportResponse {
    fn from(result: ReportResult) -> Self {
        Self {
            success: true,
            report: result.text,
            currency: result.currency_pair.code().to_string(),
            start_date: result.start_date.format(DATE_FORMAT).to_string(),
            end_date: result.end_date.format(DATE_FORMAT).to_string(),
            model: result.model,
        }
    }
}

/// Body of a download request. Missing fields default to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadRequest {
    /// Report text to render.
    pub report: String,
    /// Currency pair code.
    pub currency: String,
    /// Period start.
    pub start_date: String,
    /// Period end.
    pub end_date: String,
}

async fn generate_report(
    State(state): State<AppState>,
    form: Result<Form<RawReportRequest>, FormRejection>,
) -> Result<Json<GenerateReportResponse>, ApiError> {
    let Form(raw) = form?;
    let result = state.generator.generate(&raw).await?;
    Ok(Json(result.into()))
}

async fn download_pdf(
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let filename = download_filename(&request.currency, &request.start_date, &request.end_date);

    let bytes = tokio::task::spawn_blocking(move || {
        render_pdf(&ReportDocument {
            currency: &request.currency,
            start_date: &request.start_date,
            end_date: &request.end_date,
            body: &request.report,
        })
    })
    .await
    .map_err(|e| AppError::Internal(format!("PDF task failed: {e}")))??;

    info!(filename = %filename, bytes = bytes.len(), "PDF download prepared");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
