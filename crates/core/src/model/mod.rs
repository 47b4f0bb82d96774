//! Resilient text generation.
//!
//! This module provides:
//! - The [`TextModel`] provider seam
//! - Per-attempt failure classification
//! - [`ModelInvoker`], which tries model identifiers in order and aggregates
//!   failures into a single [`ModelError`]

pub mod classify;
pub mod error;
pub mod invoker;
pub mod traits;

pub use classify::{FailureKind, classify_message};
pub use error::{ModelCallError, ModelError};
pub use invoker::{AttemptOutcome, Generation, ModelInvoker};
pub use traits::TextModel;
