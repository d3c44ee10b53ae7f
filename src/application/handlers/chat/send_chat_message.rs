//! SendChatMessage command handler.
//!
//! One independent completion per message; no conversation memory is
//! sent to the model. Both sides of the exchange are recorded for the user.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::{ChatMessage, NewChatExchange, CHAT_SYSTEM_PROMPT, EMPTY_REPLY_FALLBACK};
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::ports::{AIError, AIProvider, ChatHistoryRepository, CompletionRequest, MessageRole};

/// Command to ask the travel guide a question.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: UserId,
    pub message: String,
}

impl SendChatMessageCommand {
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
        }
    }
}

/// Sampling settings for chat completions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Errors that can occur when sending a chat message.
#[derive(Debug, Clone, Error)]
pub enum SendChatMessageError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("AI provider error: {0}")]
    AIProviderError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AIError> for SendChatMessageError {
    fn from(err: AIError) -> Self {
        SendChatMessageError::AIProviderError(err.to_string())
    }
}

impl From<DomainError> for SendChatMessageError {
    fn from(err: DomainError) -> Self {
        SendChatMessageError::RepositoryError(err.to_string())
    }
}

/// Handler for SendChatMessage commands.
pub struct SendChatMessageHandler {
    ai_provider: Arc<dyn AIProvider>,
    history: Arc<dyn ChatHistoryRepository>,
    settings: ChatSettings,
}

impl SendChatMessageHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        history: Arc<dyn ChatHistoryRepository>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            ai_provider,
            history,
            settings,
        }
    }

    /// Returns the guide's reply.
    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<String, SendChatMessageError> {
        let message = ChatMessage::new(cmd.message)?;

        let request = CompletionRequest::new()
            .with_system_prompt(CHAT_SYSTEM_PROMPT)
            .with_message(MessageRole::User, message.as_str())
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature);

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::error!(error = %e, "chat completion failed");
            e
        })?;

        let reply = if response.content.trim().is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            response.content
        };

        self.history
            .append(NewChatExchange::from_user(cmd.user_id, message.as_str()))
            .await?;
        self.history
            .append(NewChatExchange::from_assistant(cmd.user_id, &reply))
            .await?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemoryTravelStore;

    fn handler(provider: &MockAIProvider, store: &InMemoryTravelStore) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            Arc::new(provider.clone()),
            Arc::new(store.clone()),
            ChatSettings::default(),
        )
    }

    #[tokio::test]
    async fn returns_reply_and_records_both_sides() {
        let provider = MockAIProvider::new().with_response("Visite em maio.");
        let store = InMemoryTravelStore::new();

        let reply = handler(&provider, &store)
            .handle(SendChatMessageCommand::new(UserId::DEMO, "Quando ir a Lisboa?"))
            .await
            .unwrap();

        assert_eq!(reply, "Visite em maio.");
        let history = store.list_by_user(UserId::DEMO).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "Quando ir a Lisboa?");
        assert!(history[0].is_user);
        assert_eq!(history[1].content, "Visite em maio.");
    }

    #[tokio::test]
    async fn sends_guide_prompt_with_bounded_output() {
        let provider = MockAIProvider::new();
        let store = InMemoryTravelStore::new();

        handler(&provider, &store)
            .handle(SendChatMessageCommand::new(UserId::DEMO, "Oi"))
            .await
            .unwrap();

        let call = &provider.get_calls()[0];
        assert_eq!(call.system_prompt.as_deref(), Some(CHAT_SYSTEM_PROMPT));
        assert_eq!(call.max_tokens, Some(500));
        assert_eq!(call.temperature, Some(0.7));
        assert_eq!(call.messages.len(), 1);
        assert!(!call.json_mode);
    }

    #[tokio::test]
    async fn empty_message_never_reaches_provider() {
        let provider = MockAIProvider::new();
        let store = InMemoryTravelStore::new();

        let err = handler(&provider, &store)
            .handle(SendChatMessageCommand::new(UserId::DEMO, ""))
            .await
            .unwrap_err();

        assert!(matches!(err, SendChatMessageError::Validation(_)));
        assert_eq!(provider.call_count(), 0);
        assert!(store.list_by_user(UserId::DEMO).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_completion_uses_fallback_reply() {
        let provider = MockAIProvider::new().with_response("");
        let store = InMemoryTravelStore::new();

        let reply = handler(&provider, &store)
            .handle(SendChatMessageCommand::new(UserId::DEMO, "Oi"))
            .await
            .unwrap();

        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn provider_failure_records_nothing() {
        let provider = MockAIProvider::new().with_error(AIError::unavailable("down"));
        let store = InMemoryTravelStore::new();

        let err = handler(&provider, &store)
            .handle(SendChatMessageCommand::new(UserId::DEMO, "Oi"))
            .await
            .unwrap_err();

        assert!(matches!(err, SendChatMessageError::AIProviderError(_)));
        assert!(store.list_by_user(UserId::DEMO).await.unwrap().is_empty());
    }
}
