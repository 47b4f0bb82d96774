//! Input validation for report requests.

use chrono::NaiveDate;
use thiserror::Error;

use super::currency::CurrencyPair;
use super::types::{DATE_FORMAT, RawReportRequest, ReportRequest};

/// Validation errors, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field is absent or blank.
    #[error("All fields are required")]
    MissingField {
        /// Name of the first missing field.
        field: &'static str,
    },

    /// Currency code not on the allow-list.
    #[error("Invalid currency selected")]
    InvalidCurrency(String),

    /// A date does not parse as `YYYY-MM-DD`.
    #[error("Invalid date format")]
    InvalidDateFormat(String),

    /// Start is not strictly before end.
    #[error("End date must be after start date")]
    InvalidDateOrder {
        /// Period start.
        start: NaiveDate,
        /// Period end.
        end: NaiveDate,
    },
}

/// Validates raw request fields.
///
/// Order: presence, currency membership, date format, date order. The first
/// failing check determines the error.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn validate_request(raw: &RawReportRequest) -> Result<ReportRequest, ValidationError> {
    let currency = required(raw.currency.as_deref(), "currency")?;
    let start = required(raw.start_date.as_deref(), "start_date")?;
    let end = required(raw.end_date.as_deref(), "end_date")?;

    let currency_pair = currency
        .parse::<CurrencyPair>()
        .map_err(|e| ValidationError::InvalidCurrency(e.0))?;

    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if start_date >= end_date {
        return Err(ValidationError::InvalidDateOrder {
            start: start_date,
            end: end_date,
        });
    }

    Ok(ReportRequest {
        currency_pair,
        start_date,
        end_date,
    })
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))
}
