//! Shared errors and configuration for the currency report service.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - The redacted provider credential

pub mod config;
pub mod error;
pub mod secret;

pub use config::{AppConfig, ModelConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use secret::ApiKey;
