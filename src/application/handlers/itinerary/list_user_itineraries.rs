//! ListUserItineraries query handler.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::itinerary::Itinerary;
use crate::ports::ItineraryRepository;

/// Query for every itinerary a user generated.
#[derive(Debug, Clone)]
pub struct ListUserItinerariesQuery {
    pub user_id: UserId,
}

/// Error type for listing itineraries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUserItinerariesError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for ListUserItinerariesError {
    fn from(err: DomainError) -> Self {
        ListUserItinerariesError::Infrastructure(err.to_string())
    }
}

pub struct ListUserItinerariesHandler {
    itineraries: Arc<dyn ItineraryRepository>,
}

impl ListUserItinerariesHandler {
    pub fn new(itineraries: Arc<dyn ItineraryRepository>) -> Self {
        Self { itineraries }
    }

    pub async fn handle(
        &self,
        query: ListUserItinerariesQuery,
    ) -> Result<Vec<Itinerary>, ListUserItinerariesError> {
        Ok(self.itineraries.list_by_user(query.user_id).await?)
    }
}
