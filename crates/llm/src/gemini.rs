//! Gemini `generateContent` client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use fxreport_core::model::{ModelCallError, TextModel};
use fxreport_shared::{ApiKey, ModelConfig};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;
use tracing::debug;

use crate::wire::{GenerateRequest, parse_generate_response};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

const API_VERSION: &str = "v1beta";

/// Errors building a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key is configured.
    #[error("model API key is not configured")]
    MissingApiKey,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for one Gemini endpoint and credential.
///
/// Cheap to share: the underlying connection pool is reused across calls.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client. `timeout` bounds each HTTP exchange.
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("fxreport/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ClientError> {
        let api_key = config.credential().ok_or(ClientError::MissingApiKey)?;
        Self::new(
            config.base_url.clone(),
            api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Endpoint URL for one model. A leading `models/` is accepted.
    #[must_use]
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/{API_VERSION}/models/{model}:generateContent",
            self.base_url
        )
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ModelCallError> {
        let url = self.endpoint(model);
        let started = Instant::now();

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        debug!(
            model,
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Provider responded"
        );

        parse_generate_response(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> ModelCallError {
    let err = err.without_url();
    if err.is_timeout() {
        ModelCallError::timeout(format!("provider request timed out: {err}"))
    } else {
        ModelCallError::from_message(format!("provider request failed: {err}"))
    }
}
