//! Document error types.

use thiserror::Error;

/// Errors that can occur while producing the downloadable report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The report body is empty or whitespace.
    #[error("No report text provided")]
    EmptyReport,

    /// The PDF backend failed.
    #[error("{0}")]
    Render(String),
}
