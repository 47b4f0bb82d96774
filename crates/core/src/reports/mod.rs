//! Currency report generation.
//!
//! This module provides the request side of the pipeline:
//! - Currency pair allow-list
//! - Request validation
//! - Prompt construction
//! - The [`ReportGenerator`] that ties them to the model chain

pub mod currency;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use currency::{CurrencyPair, UnknownCurrencyPair};
pub use error::ReportError;
pub use generator::{ReportGenerator, Stage};
pub use prompt::{PROMPT_TEMPLATE_VERSION, build_prompt};
pub use types::*;
pub use validation::{ValidationError, validate_request};
