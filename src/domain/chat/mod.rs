//! Travel chat: a single-turn exchange with the AI travel guide.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_non_empty, RecordId, Timestamp, UserId, ValidationError};

/// Instruction sent with every chat completion.
pub const CHAT_SYSTEM_PROMPT: &str = "Você é um especialista sábio em viagens internacionais. \
Suas respostas são informativas, objetivas e cheias de conhecimento prático. \
Fale como um guia experiente, mantendo suas respostas em português.";

/// Reply used when the model answers with nothing.
pub const EMPTY_REPLY_FALLBACK: &str =
    "Desculpe, não consegui processar sua pergunta. Por favor, tente novamente.";

/// A validated chat message from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage(String);

impl ChatMessage {
    pub fn new(message: impl Into<String>) -> Result<Self, ValidationError> {
        let message = message.into();
        require_non_empty("message", &message)?;
        Ok(Self(message))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One side of a stored chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub id: RecordId,
    pub user_id: UserId,
    pub content: String,
    pub is_user: bool,
    pub timestamp: Timestamp,
}

/// Fields for appending a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatExchange {
    pub user_id: UserId,
    pub content: String,
    pub is_user: bool,
}

impl NewChatExchange {
    pub fn from_user(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            content: content.into(),
            is_user: true,
        }
    }

    pub fn from_assistant(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            content: content.into(),
            is_user: false,
        }
    }
}
