//! User repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the username is taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    async fn find(&self, id: UserId) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
