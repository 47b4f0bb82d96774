//! Report generation pipeline.

use std::fmt;

use tracing::{debug, info, warn};

use super::error::ReportError;
use super::prompt::build_prompt;
use super::types::{RawReportRequest, ReportResult};
use super::validation::validate_request;
use crate::model::ModelInvoker;

/// Pipeline stages, in order. A request moves through them once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Checking the raw fields.
    Validating,
    /// Rendering the prompt.
    Prompting,
    /// Calling the model chain.
    Invoking,
    /// Text obtained.
    Completed,
    /// Stopped with an error.
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validating => "validating",
            Self::Prompting => "prompting",
            Self::Invoking => "invoking",
            Self::Completed => "completed",
            Self::Failed => "failed",
        })
    }
}

/// Turns a raw request into a generated report.
///
/// Stateless across requests; share it behind an `Arc`.
pub struct ReportGenerator {
    invoker: Option<ModelInvoker>,
}

impl ReportGenerator {
    /// Creates a generator backed by a model chain.
    #[must_use]
    pub const fn new(invoker: ModelInvoker) -> Self {
        Self {
            invoker: Some(invoker),
        }
    }

    /// Creates a generator without a provider credential. Requests still
    /// validate, then fail with [`ReportError::NotConfigured`].
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { invoker: None }
    }

    /// Whether a model chain is available.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.invoker.is_some()
    }

    /// Runs the pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns the error of the stage that stopped the request.
    pub async fn generate(&self, raw: &RawReportRequest) -> Result<ReportResult, ReportError> {
        debug!(stage = %Stage::Validating, "Report request received");
        let request = validate_request(raw).inspect_err(|e| {
            debug!(stage = %Stage::Failed, error = %e, "Report request rejected");
        })?;

        let Some(invoker) = &self.invoker else {
            warn!(stage = %Stage::Failed, "Report requested but no model API key is configured");
            return Err(ReportError::NotConfigured);
        };

        debug!(stage = %Stage::Prompting, currency = %request.currency_pair, "Building prompt");
        let prompt = build_prompt(&request);

        debug!(stage = %Stage::Invoking, models = invoker.models().len(), "Invoking model chain");
        let generation = invoker.invoke(&prompt).await.inspect_err(|e| {
            warn!(stage = %Stage::Failed, error = %e, "Report generation failed");
        })?;

        info!(
            stage = %Stage::Completed,
            currency = %request.currency_pair,
            start = %request.start_date,
            end = %request.end_date,
            model = %generation.model,
            fallbacks = generation.failed_attempts.len(),
            "Report generated"
        );

        Ok(ReportResult {
            text: generation.text,
            currency_pair: request.currency_pair,
            start_date: request.start_date,
            end_date: request.end_date,
            model: generation.model,
        })
    }
}
