//! Chat history port (append-only).

use crate::domain::chat::{ChatExchange, NewChatExchange};
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    async fn append(&self, exchange: NewChatExchange) -> Result<ChatExchange, DomainError>;

    /// Exchanges for `user_id` in the order they were appended.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ChatExchange>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_history_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ChatHistoryRepository) {}
    }
}
