//! Structured Generator Port - "submit an instruction, receive a parsed array".
//!
//! Itinerary and checklist generation depend only on this port. Two
//! adapters implement it: a single JSON-mode completion, and the
//! assistant thread/run protocol with bounded polling. Which one runs is
//! a configuration choice.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use super::ai_provider::AIError;
use super::assistant_threads::ThreadError;
use crate::domain::generation::ExtractionError;

/// Port for generating a JSON array of records from an instruction.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// Runs one generation. Never returns a partial result.
    async fn generate(&self, request: StructuredRequest) -> Result<Vec<Value>, GenerationError>;
}

/// What is being generated; selects the assistant identity where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationKind {
    Itinerary,
    Checklist,
}

impl GenerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationKind::Itinerary => "itinerary",
            GenerationKind::Checklist => "checklist",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredRequest {
    pub kind: GenerationKind,
    /// Role instruction; used where the integration accepts one.
    pub system_prompt: String,
    /// User instruction embedding parameters and output schema.
    pub instruction: String,
}

impl StructuredRequest {
    pub fn new(
        kind: GenerationKind,
        system_prompt: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            system_prompt: system_prompt.into(),
            instruction: instruction.into(),
        }
    }
}

/// Errors from structured generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The AI service could not be reached or refused the request.
    #[error("upstream AI error: {0}")]
    Upstream(String),

    /// The assistant run ended in a non-successful state.
    #[error("assistant run {status}: {message}")]
    RunFailed { status: String, message: String },

    /// The run did not finish within the polling budget.
    #[error("assistant run did not finish within {waited_secs}s")]
    Timeout { waited_secs: u64 },

    /// The model replied with nothing usable.
    #[error("assistant returned nothing")]
    EmptyReply,

    /// The model hit its token limit before finishing the JSON.
    #[error("reply was cut off at the token limit")]
    Truncated,

    /// The reply could not be interpreted as the required JSON array.
    #[error("invalid response format: {0}")]
    InvalidFormat(#[from] ExtractionError),
}

impl GenerationError {
    pub fn run_failed(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RunFailed {
            status: status.into(),
            message: message.into(),
        }
    }

    /// True when the model answered but the answer was unusable, as
    /// opposed to the service failing.
    pub fn is_reply_problem(&self) -> bool {
        matches!(self, Self::EmptyReply | Self::Truncated | Self::InvalidFormat(_))
    }
}

impl From<AIError> for GenerationError {
    fn from(err: AIError) -> Self {
        GenerationError::Upstream(err.to_string())
    }
}

impl From<ThreadError> for GenerationError {
    fn from(err: ThreadError) -> Self {
        GenerationError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_generator_is_object_safe() {
        fn _accepts_dyn(_generator: &dyn StructuredGenerator) {}
    }

    #[test]
    fn reply_problems_are_distinguished_from_outages() {
        assert!(GenerationError::EmptyReply.is_reply_problem());
        assert!(GenerationError::Truncated.is_reply_problem());
        assert!(GenerationError::from(ExtractionError::NoArrayFound).is_reply_problem());
        assert!(!GenerationError::Upstream("down".into()).is_reply_problem());
        assert!(!GenerationError::Timeout { waited_secs: 180 }.is_reply_problem());
        assert!(!GenerationError::run_failed("failed", "boom").is_reply_problem());
    }

    #[test]
    fn ai_errors_become_upstream() {
        let err: GenerationError = AIError::AuthenticationFailed.into();
        assert_eq!(err, GenerationError::Upstream("authentication failed".into()));
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(GenerationKind::Checklist.to_string(), "checklist");
    }
}
