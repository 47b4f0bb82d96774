//! Report error types.

use thiserror::Error;

use super::validation::ValidationError;
use crate::model::ModelError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The request failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No provider credential is configured.
    #[error("Model API key is not configured")]
    NotConfigured,

    /// Every model attempt failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}
