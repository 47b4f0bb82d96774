//! Core logic for the currency report service.
//!
//! This crate contains the report pipeline with ZERO web dependencies.
//! The provider client and HTTP surface live in other crates.
//!
//! # Modules
//!
//! - `reports` - Request validation, prompt construction and orchestration
//! - `model` - Model fallback chain and failure classification
//! - `document` - Word wrap, pagination and PDF rendering

pub mod document;
pub mod model;
pub mod reports;
