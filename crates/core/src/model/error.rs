//! Model invocation error types.

use thiserror::Error;

use super::classify::{FailureKind, classify_message};

/// Failure of a single call to one model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ModelCallError {
    /// Classified reason.
    pub kind: FailureKind,
    /// Provider or transport detail. Logged, never shown to callers.
    pub message: String,
}

impl ModelCallError {
    /// Creates an error with an explicit classification.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an error classified from its message text.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: classify_message(&message),
            message,
        }
    }

    /// Create a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    /// Create an empty-response error.
    #[must_use]
    pub fn empty_response() -> Self {
        Self::new(FailureKind::EmptyResponse, "response contained no text")
    }

    /// Create a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Malformed, message)
    }
}

/// Aggregated failure after every configured model was tried.
///
/// Messages are caller-facing and never name the model that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// At least one attempt was rejected for its credential.
    #[error("API key is invalid or missing")]
    Authentication {
        /// Attempts made.
        attempts: usize,
    },

    /// At least one attempt hit a quota or rate limit.
    #[error("API quota exceeded. Please try again later.")]
    QuotaExceeded {
        /// Attempts made.
        attempts: usize,
    },

    /// Every attempt returned empty text.
    #[error("the model returned an empty report after {attempts} attempt(s)")]
    EmptyResponse {
        /// Attempts made.
        attempts: usize,
    },

    /// Every attempt failed for another reason.
    #[error("all {attempts} model attempt(s) failed (last failure: {last_failure})")]
    Unavailable {
        /// Attempts made.
        attempts: usize,
        /// Label of the last failure kind.
        last_failure: String,
    },
}

impl ModelError {
    /// Number of model attempts behind this error.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        match self {
            Self::Authentication { attempts }
            | Self::QuotaExceeded { attempts }
            | Self::EmptyResponse { attempts }
            | Self::Unavailable { attempts, .. } => *attempts,
        }
    }

    /// Folds per-attempt failures into one error.
    ///
    /// Precedence: credential, then quota, then all-empty, then generic.
    #[must_use]
    pub fn aggregate(failures: &[ModelCallError]) -> Self {
        let attempts = failures.len();
        let any = |kind: FailureKind| failures.iter().any(|f| f.kind == kind);

        if any(FailureKind::Authentication) {
            Self::Authentication { attempts }
        } else if any(FailureKind::QuotaExceeded) {
            Self::QuotaExceeded { attempts }
        } else if attempts > 0 && failures.iter().all(|f| f.kind == FailureKind::EmptyResponse) {
            Self::EmptyResponse { attempts }
        } else {
            Self::Unavailable {
                attempts,
                last_failure: failures.last().map_or_else(
                    || "no model identifiers configured".to_string(),
                    |f| f.kind.to_string(),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: FailureKind) -> ModelCallError {
        ModelCallError::new(kind, "detail")
    }

    #[test]
    fn test_authentication_takes_precedence() {
        let failures = [
            failure(FailureKind::Timeout),
            failure(FailureKind::QuotaExceeded),
            failure(FailureKind::Authentication),
        ];
        assert_eq!(
            ModelError::aggregate(&failures),
            ModelError::Authentication { attempts: 3 }
        );
    }

    #[test]
    fn test_quota_over_generic() {
        let failures = [
            failure(FailureKind::QuotaExceeded),
            failure(FailureKind::Unavailable),
        ];
        assert_eq!(
            ModelError::aggregate(&failures),
            ModelError::QuotaExceeded { attempts: 2 }
        );
    }

    #[test]
    fn test_all_empty() {
        let failures = [
            ModelCallError::empty_response(),
            ModelCallError::empty_response(),
        ];
        assert_eq!(
            ModelError::aggregate(&failures),
            ModelError::EmptyResponse { attempts: 2 }
        );
    }

    #[test]
    fn test_generic_reports_last_kind() {
        let failures = [
            ModelCallError::empty_response(),
            failure(FailureKind::Timeout),
        ];
        let error = ModelError::aggregate(&failures);
        assert_eq!(
            error,
            ModelError::Unavailable {
                attempts: 2,
                last_failure: "timeout".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "all 2 model attempt(s) failed (last failure: timeout)"
        );
    }

    #[test]
    fn test_no_attempts() {
        let error = ModelError::aggregate(&[]);
        assert_eq!(error.attempts(), 0);
        assert!(matches!(error, ModelError::Unavailable { .. }));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_from_message_classifies() {
        assert_eq!(
            ModelCallError::from_message("QUOTA exhausted").kind,
            FailureKind::QuotaExceeded
        );
    }
}
