//! Gemini provider for the currency report service.
//!
//! Implements [`fxreport_core::model::TextModel`] over the
//! `generateContent` REST endpoint.

pub mod gemini;
pub mod wire;

pub use gemini::{ClientError, GeminiClient};
pub use wire::{GenerateRequest, GenerateResponse, parse_generate_response};
