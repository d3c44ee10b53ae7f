//! Itinerary repository port (append-only).

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::itinerary::{Itinerary, NewItinerary};
use async_trait::async_trait;

#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Appends an itinerary and returns the stored record.
    async fn create(&self, itinerary: NewItinerary) -> Result<Itinerary, DomainError>;

    /// Itineraries owned by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Itinerary>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ItineraryRepository) {}
    }
}
