//! Report data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyPair;

/// Date format accepted on input and used in prompts and filenames.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unvalidated request fields as they arrive from a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReportRequest {
    /// Currency pair code.
    pub currency: Option<String>,
    /// Period start (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Period end (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

impl RawReportRequest {
    /// Builds a request from present fields.
    #[must_use]
    pub fn new(
        currency: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            currency: Some(currency.into()),
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }
}

/// A validated report request. `start_date < end_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    /// Currency pair.
    pub currency_pair: CurrencyPair,
    /// Period start.
    pub start_date: NaiveDate,
    /// Period end.
    pub end_date: NaiveDate,
}

impl ReportRequest {
    /// Period start formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_label(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }

    /// Period end formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_label(&self) -> String {
        self.end_date.format(DATE_FORMAT).to_string()
    }
}

/// A generated report. Not persisted; handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResult {
    /// Report body as returned by the model, trimmed.
    pub text: String,
    /// Currency pair the report covers.
    pub currency_pair: CurrencyPair,
    /// Period start.
    pub start_date: NaiveDate,
    /// Period end.
    pub end_date: NaiveDate,
    /// Model identifier that produced the text.
    pub model: String,
}
