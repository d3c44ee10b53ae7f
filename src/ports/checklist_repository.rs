//! Checklist repository port (append-only).

use crate::domain::checklist::{Checklist, NewChecklist};
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Appends a checklist and returns the stored record.
    async fn create(&self, checklist: NewChecklist) -> Result<Checklist, DomainError>;

    /// Checklists owned by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Checklist>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ChecklistRepository) {}
    }
}
