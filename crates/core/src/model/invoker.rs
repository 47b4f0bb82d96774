//! Ordered model fallback.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::error::{ModelCallError, ModelError};
use super::traits::TextModel;

/// Result of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The model returned non-empty text (trimmed).
    Success(String),
    /// The attempt failed; the next model should be tried.
    Failure(ModelCallError),
}

/// A successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Generated text, trimmed.
    pub text: String,
    /// Model identifier that produced it.
    pub model: String,
    /// Failed attempts that preceded the success, in order.
    pub failed_attempts: Vec<ModelCallError>,
}

/// Calls models in a fixed order until one returns text.
///
/// Exactly one attempt per identifier, each bounded by the attempt timeout.
/// No retries, no backoff, no parallel racing.
pub struct ModelInvoker {
    client: Arc<dyn TextModel>,
    models: Vec<String>,
    attempt_timeout: Duration,
}

impl ModelInvoker {
    /// Default per-attempt timeout.
    pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates an invoker. Blank identifiers are dropped.
    #[must_use]
    pub fn new(client: Arc<dyn TextModel>, models: Vec<String>, attempt_timeout: Duration) -> Self {
        let models = models
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        Self {
            client,
            models,
            attempt_timeout,
        }
    }

    /// Model identifiers in fallback order.
    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Per-attempt timeout.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Generates text, falling back through the configured models.
    ///
    /// # Errors
    ///
    /// Returns an aggregated [`ModelError`] once every model has failed.
    pub async fn invoke(&self, prompt: &str) -> Result<Generation, ModelError> {
        let mut failures = Vec::with_capacity(self.models.len());

        for (index, model) in self.models.iter().enumerate() {
            let started = Instant::now();
            match self.attempt(model, prompt).await {
                AttemptOutcome::Success(text) => {
                    info!(
                        model = %model,
                        attempt = index + 1,
                        elapsed_ms = elapsed_ms(started),
                        chars = text.chars().count(),
                        "Model attempt succeeded"
                    );
                    return Ok(Generation {
                        text,
                        model: model.clone(),
                        failed_attempts: failures,
                    });
                }
                AttemptOutcome::Failure(error) => {
                    warn!(
                        model = %model,
                        attempt = index + 1,
                        elapsed_ms = elapsed_ms(started),
                        kind = %error.kind,
                        error = %error.message,
                        "Model attempt failed"
                    );
                    failures.push(error);
                }
            }
        }

        Err(ModelError::aggregate(&failures))
    }

    /// Runs one bounded attempt and tags its outcome.
    pub async fn attempt(&self, model: &str, prompt: &str) -> AttemptOutcome {
        let call = self.client.generate(model, prompt);
        match tokio::time::timeout(self.attempt_timeout, call).await {
            Err(_) => AttemptOutcome::Failure(ModelCallError::timeout(format!(
                "no response within {}s",
                self.attempt_timeout.as_secs_f64()
            ))),
            Ok(Err(error)) => AttemptOutcome::Failure(error),
            Ok(Ok(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    AttemptOutcome::Failure(ModelCallError::empty_response())
                } else {
                    AttemptOutcome::Success(text.to_string())
                }
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::model::FailureKind;

    /// Scripted provider that records every model it is asked for.
    #[derive(Default)]
    struct ScriptedModel {
        replies: HashMap<String, Result<String, ModelCallError>>,
        delay: Option<Duration>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn reply(mut self, model: &str, reply: Result<&str, ModelCallError>) -> Self {
            self.replies
                .insert(model.to_string(), reply.map(str::to_string));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn generate(&self, model: &str, _prompt: &str) -> Result<String, ModelCallError> {
            self.calls.lock().unwrap().push(model.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.replies
                .get(model)
                .cloned()
                .unwrap_or_else(|| Err(ModelCallError::from_message("unknown model")))
        }
    }

    fn models() -> Vec<String> {
        vec!["fast".into(), "capable".into(), "legacy".into()]
    }

    fn invoker(model: &Arc<ScriptedModel>) -> ModelInvoker {
        ModelInvoker::new(model.clone(), models(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_first_model_success_stops_immediately() {
        let model = Arc::new(ScriptedModel::default().reply("fast", Ok("  report  ")));

        let generation = invoker(&model).invoke("prompt").await.unwrap();

        assert_eq!(generation.text, "report");
        assert_eq!(generation.model, "fast");
        assert!(generation.failed_attempts.is_empty());
        assert_eq!(model.calls(), vec!["fast"]);
    }

    #[tokio::test]
    async fn test_fallback_to_second_never_calls_third() {
        let model = Arc::new(
            ScriptedModel::default()
                .reply("fast", Err(ModelCallError::from_message("boom")))
                .reply("capable", Ok("second"))
                .reply("legacy", Ok("third")),
        );

        let generation = invoker(&model).invoke("prompt").await.unwrap();

        assert_eq!(generation.text, "second");
        assert_eq!(generation.model, "capable");
        assert_eq!(generation.failed_attempts.len(), 1);
        assert_eq!(model.calls(), vec!["fast", "capable"]);
    }

    #[tokio::test]
    async fn test_empty_text_advances_to_next_model() {
        let model = Arc::new(
            ScriptedModel::default()
                .reply("fast", Ok("   \n "))
                .reply("capable", Ok("real text")),
        );

        let generation = invoker(&model).invoke("prompt").await.unwrap();

        assert_eq!(generation.text, "real text");
        assert_eq!(
            generation.failed_attempts[0].kind,
            FailureKind::EmptyResponse
        );
    }

    #[tokio::test]
    async fn test_all_fail_aggregates_once() {
        let model = Arc::new(
            ScriptedModel::default()
                .reply("fast", Err(ModelCallError::from_message("boom")))
                .reply("capable", Err(ModelCallError::from_message("bang")))
                .reply("legacy", Err(ModelCallError::malformed("not json"))),
        );

        let error = invoker(&model).invoke("prompt").await.unwrap_err();

        assert_eq!(error.attempts(), 3);
        let message = error.to_string();
        assert!(!message.is_empty());
        for name in models() {
            assert!(!message.contains(&name));
        }
        assert_eq!(model.calls(), models());
    }

    #[tokio::test]
    async fn test_quota_classification_surfaces() {
        let model = Arc::new(
            ScriptedModel::default()
                .reply("fast", Err(ModelCallError::from_message("Quota exceeded")))
                .reply("capable", Err(ModelCallError::from_message("boom")))
                .reply("legacy", Err(ModelCallError::from_message("boom"))),
        );

        let error = invoker(&model).invoke("prompt").await.unwrap_err();

        assert_eq!(error, ModelError::QuotaExceeded { attempts: 3 });
    }

    #[tokio::test]
    async fn test_slow_model_times_out_and_falls_back() {
        let slow = Arc::new(ScriptedModel {
            delay: Some(Duration::from_secs(10)),
            ..ScriptedModel::default()
        });
        let invoker = ModelInvoker::new(slow.clone(), vec!["only".into()], Duration::from_millis(20));

        let outcome = invoker.attempt("only", "prompt").await;

        assert!(matches!(
            outcome,
            AttemptOutcome::Failure(ModelCallError {
                kind: FailureKind::Timeout,
                ..
            })
        ));
    }

    #[test]
    fn test_blank_identifiers_dropped() {
        let model = Arc::new(ScriptedModel::default());
        let invoker = ModelInvoker::new(
            model,
            vec![" fast ".into(), String::new(), "  ".into(), "legacy".into()],
            ModelInvoker::DEFAULT_ATTEMPT_TIMEOUT,
        );
        assert_eq!(invoker.models(), ["fast", "legacy"]);
    }

    #[tokio::test]
    async fn test_no_models_configured() {
        let model = Arc::new(ScriptedModel::default());
        let invoker = ModelInvoker::new(model.clone(), vec![], Duration::from_secs(1));

        let error = invoker.invoke("prompt").await.unwrap_err();

        assert_eq!(error.attempts(), 0);
        assert!(model.calls().is_empty());
    }
}
