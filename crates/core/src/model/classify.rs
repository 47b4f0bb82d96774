//! Failure classification for provider errors.

use std::fmt;

/// Why a single model attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Credential missing or rejected.
    Authentication,
    /// Quota or rate limit reached.
    QuotaExceeded,
    /// The attempt ran past its deadline.
    Timeout,
    /// The call succeeded but carried no text.
    EmptyResponse,
    /// The response could not be understood.
    Malformed,
    /// Any other provider or transport failure.
    Unavailable,
}

impl FailureKind {
    /// Stable label for logs and aggregated messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::QuotaExceeded => "quota_exceeded",
            Self::Timeout => "timeout",
            Self::EmptyResponse => "empty_response",
            Self::Malformed => "malformed_response",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a provider error from its message text alone.
///
/// Last resort for clients that expose no structured code: `API_KEY` marks a
/// credential problem, `QUOTA` or `LIMIT` a quota problem, anything else is
/// generic. Matching is case-insensitive.
#[must_use]
pub fn classify_message(message: &str) -> FailureKind {
    let upper = message.to_ascii_uppercase();
    if upper.contains("API_KEY") || upper.contains("API KEY") {
        FailureKind::Authentication
    } else if upper.contains("QUOTA") || upper.contains("LIMIT") {
        FailureKind::QuotaExceeded
    } else {
        FailureKind::Unavailable
    }
}
