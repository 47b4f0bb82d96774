//! `generateContent` request and response bodies.

use fxreport_core::model::{FailureKind, ModelCallError, classify_message};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest slice of a raw body kept in an error message.
const MAX_BODY_IN_ERROR: usize = 200;

/// Request body: one user turn with one text part.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    /// Wraps a prompt.
    #[must_use]
    pub const fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

/// Successful response body. Only the fields we read are modelled.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, with its parts concatenated.
    ///
    /// `None` when there is no candidate or it carries no text part.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut texts = parts.iter().filter_map(|p| p.text.as_deref()).peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    /// Why no text came back, when the provider says so.
    fn empty_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .or_else(|| {
                self.candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
            })
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<Value>,
}

impl ErrorBody {
    fn reasons(&self) -> impl Iterator<Item = &str> {
        self.details
            .iter()
            .filter_map(|d| d.get("reason").and_then(Value::as_str))
    }
}

/// Interprets one HTTP exchange with the provider.
///
/// Structured signals win over message text: 401/403, an `UNAUTHENTICATED`
/// or `PERMISSION_DENIED` status and an `API_KEY_INVALID` reason mean the
/// credential was refused; 429 and `RESOURCE_EXHAUSTED` mean quota. Anything
/// else is classified from the error message.
///
/// # Errors
///
/// Returns a classified [`ModelCallError`] for non-2xx statuses, bodies that
/// do not parse, and responses without text.
pub fn parse_generate_response(status: u16, body: &str) -> Result<String, ModelCallError> {
    if !(200..300).contains(&status) {
        return Err(error_from_status(status, body));
    }

    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ModelCallError::malformed(format!("invalid response body: {e}")))?;

    match response.text() {
        Some(text) => Ok(text),
        None => {
            let reason = response.empty_reason().unwrap_or("no candidates");
            Err(ModelCallError::new(
                FailureKind::EmptyResponse,
                format!("response contained no text ({reason})"),
            ))
        }
    }
}

fn error_from_status(status: u16, body: &str) -> ModelCallError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let Some(ErrorEnvelope { error }) = envelope else {
        let kind = match status {
            401 | 403 => FailureKind::Authentication,
            429 => FailureKind::QuotaExceeded,
            _ => classify_message(body),
        };
        return ModelCallError::new(kind, format!("HTTP {status}: {}", truncate(body)));
    };

    let provider_status = error.status.as_deref().unwrap_or_default();
    let kind = if matches!(status, 401 | 403)
        || matches!(provider_status, "UNAUTHENTICATED" | "PERMISSION_DENIED")
        || error.reasons().any(|r| r == "API_KEY_INVALID")
    {
        FailureKind::Authentication
    } else if status == 429 || provider_status == "RESOURCE_EXHAUSTED" {
        FailureKind::QuotaExceeded
    } else {
        classify_message(&error.message)
    };

    ModelCallError::new(kind, format!("HTTP {status}: {}", truncate(&error.message)))
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
