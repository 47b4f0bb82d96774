//! Provider seam for text generation.

use async_trait::async_trait;

use super::error::ModelCallError;

/// A generative-text provider.
///
/// One call is one outbound request for one model identifier. Implementations
/// should classify failures as precisely as the provider allows; retries and
/// fallback are the invoker's job, not the provider's.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generates text for `prompt` using the model named `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ModelCallError>;
}
