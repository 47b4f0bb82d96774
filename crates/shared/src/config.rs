//! Application configuration management.

use serde::Deserialize;

use crate::secret::ApiKey;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Generative-text provider configuration.
    #[serde(default)]
    pub model: ModelConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Hosting platforms hand the port over in `PORT`.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(5000)
}

/// Generative-text provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Provider credential. `None` leaves the service running but unable to
    /// generate reports.
    #[serde(default = "default_api_key")]
    pub api_key: Option<ApiKey>,
    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifiers in fallback order.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Timeout for a single model attempt, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            models: default_models(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ModelConfig {
    /// Returns the credential if one is present and non-blank.
    #[must_use]
    pub fn credential(&self) -> Option<&ApiKey> {
        self.api_key.as_ref().filter(|key| !key.is_blank())
    }

    /// Whether a usable credential is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credential().is_some()
    }
}

fn default_api_key() -> Option<ApiKey> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(ApiKey::new)
        .filter(|key| !key.is_blank())
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_models() -> Vec<String> {
    vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-pro".to_string(),
        "models/gemini-pro".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FXREPORT")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("model.models"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the deserializer cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if the model list is empty or the timeout is zero.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.model.models.iter().all(|m| m.trim().is_empty()) {
            return Err(config::ConfigError::Message(
                "model.models must list at least one model identifier".to_string(),
            ));
        }
        if self.model.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "model.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
