//! Structured generation through a single JSON-mode completion.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::generation::array_from_structured_reply;
use crate::ports::{
    AIProvider, CompletionRequest, FinishReason, GenerationError, MessageRole,
    StructuredGenerator, StructuredRequest,
};

/// JSON-object mode cannot return a bare array, so the reply is wrapped.
const OBJECT_WRAPPER_NOTE: &str = "\n\nResponda apenas com um objeto JSON no formato \
{\"items\": [...]}, em que \"items\" é o array descrito acima.";

/// Generator that asks the completion model for the array in one round trip.
pub struct CompletionStructuredGenerator {
    provider: Arc<dyn AIProvider>,
    temperature: f32,
}

impl CompletionStructuredGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, temperature: f32) -> Self {
        Self {
            provider,
            temperature,
        }
    }
}

#[async_trait]
impl StructuredGenerator for CompletionStructuredGenerator {
    async fn generate(&self, request: StructuredRequest) -> Result<Vec<Value>, GenerationError> {
        let completion = CompletionRequest::new()
            .with_system_prompt(&request.system_prompt)
            .with_message(
                MessageRole::User,
                format!("{}{}", request.instruction, OBJECT_WRAPPER_NOTE),
            )
            .with_temperature(self.temperature)
            .with_json_mode();

        let response = self.provider.complete(completion).await.map_err(|e| {
            tracing::error!(kind = %request.kind, error = %e, "completion failed");
            GenerationError::from(e)
        })?;

        if response.content.trim().is_empty() {
            tracing::warn!(kind = %request.kind, "completion returned no content");
            return Err(GenerationError::EmptyReply);
        }

        array_from_structured_reply(&response.content).map_err(|e| {
            if response.finish_reason == FinishReason::Length {
                tracing::warn!(kind = %request.kind, error = %e, "completion hit the token limit");
                return GenerationError::Truncated;
            }
            tracing::warn!(kind = %request.kind, error = %e, "completion reply is not a JSON array");
            GenerationError::InvalidFormat(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::generation::ExtractionError;
    use crate::ports::{AIError, GenerationKind};
    use serde_json::json;

    fn request() -> StructuredRequest {
        StructuredRequest::new(GenerationKind::Checklist, "Especialista", "Gere um checklist")
    }

    fn generator(provider: &MockAIProvider) -> CompletionStructuredGenerator {
        CompletionStructuredGenerator::new(Arc::new(provider.clone()), 0.7)
    }

    #[tokio::test]
    async fn unwraps_items_object() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"items": [{"id": "1", "text": "Passaporte"}]}"#);

        let items = generator(&provider).generate(request()).await.unwrap();
        assert_eq!(items, vec![json!({"id": "1", "text": "Passaporte"})]);
    }

    #[tokio::test]
    async fn accepts_bare_array() {
        let provider = MockAIProvider::new().with_response(r#"[{"id": 1}]"#);
        let items = generator(&provider).generate(request()).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn sends_json_mode_request_with_prompts() {
        let provider = MockAIProvider::new().with_response("[]");
        generator(&provider).generate(request()).await.unwrap();

        let call = &provider.get_calls()[0];
        assert!(call.json_mode);
        assert_eq!(call.system_prompt.as_deref(), Some("Especialista"));
        assert_eq!(call.temperature, Some(0.7));
        assert!(call.messages[0].content.starts_with("Gere um checklist"));
        assert!(call.messages[0].content.contains("\"items\""));
    }

    #[tokio::test]
    async fn empty_reply_is_distinct() {
        let provider = MockAIProvider::new().with_response("  ");
        let err = generator(&provider).generate(request()).await.unwrap_err();
        assert_eq!(err, GenerationError::EmptyReply);
    }

    #[tokio::test]
    async fn object_without_array_is_invalid_format() {
        let provider = MockAIProvider::new().with_response(r#"{"message": "sem itens"}"#);
        let err = generator(&provider).generate(request()).await.unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidFormat(ExtractionError::NotAnArray { found: "object" })
        );
    }

    #[tokio::test]
    async fn cut_off_reply_is_truncated() {
        let provider = MockAIProvider::new()
            .with_truncated_response(r#"{"items": [{"id": "1", "text": "Passap"#);
        let err = generator(&provider).generate(request()).await.unwrap_err();
        assert_eq!(err, GenerationError::Truncated);
    }

    #[tokio::test]
    async fn complete_json_at_token_limit_is_still_accepted() {
        let provider = MockAIProvider::new().with_truncated_response(r#"{"items": [{"id": "1"}]}"#);
        let items = generator(&provider).generate(request()).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn provider_failure_is_upstream() {
        let provider = MockAIProvider::new().with_error(AIError::network("reset"));
        let err = generator(&provider).generate(request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Upstream(_)));
    }
}
