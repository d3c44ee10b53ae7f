//! ListUserChecklists query handler.

use std::sync::Arc;

use crate::domain::checklist::Checklist;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ChecklistRepository;

/// Query for every checklist a user generated.
#[derive(Debug, Clone)]
pub struct ListUserChecklistsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUserChecklistsError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for ListUserChecklistsError {
    fn from(err: DomainError) -> Self {
        ListUserChecklistsError::Infrastructure(err.to_string())
    }
}

pub struct ListUserChecklistsHandler {
    checklists: Arc<dyn ChecklistRepository>,
}

impl ListUserChecklistsHandler {
    pub fn new(checklists: Arc<dyn ChecklistRepository>) -> Self {
        Self { checklists }
    }

    pub async fn handle(
        &self,
        query: ListUserChecklistsQuery,
    ) -> Result<Vec<Checklist>, ListUserChecklistsError> {
        Ok(self.checklists.list_by_user(query.user_id).await?)
    }
}
