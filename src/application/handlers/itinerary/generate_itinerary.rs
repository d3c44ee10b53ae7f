//! GenerateItinerary command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::generation::decode_records;
use crate::domain::itinerary::{
    itinerary_instruction, ItineraryDay, ItineraryRequest, NewItinerary, ITINERARY_SYSTEM_PROMPT,
};
use crate::ports::{
    GenerationError, GenerationKind, ItineraryRepository, StructuredGenerator, StructuredRequest,
};

/// Command to generate a day-by-day itinerary.
#[derive(Debug, Clone)]
pub struct GenerateItineraryCommand {
    pub user_id: UserId,
    pub main_destination: String,
    pub other_destinations: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub interests: Vec<String>,
    pub preferences: String,
}

/// Errors that can occur when generating an itinerary.
#[derive(Debug, Clone, Error)]
pub enum GenerateItineraryError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for GenerateItineraryError {
    fn from(err: DomainError) -> Self {
        GenerateItineraryError::RepositoryError(err.to_string())
    }
}

/// Handler for GenerateItinerary commands.
pub struct GenerateItineraryHandler {
    generator: Arc<dyn StructuredGenerator>,
    itineraries: Arc<dyn ItineraryRepository>,
}

impl GenerateItineraryHandler {
    pub fn new(
        generator: Arc<dyn StructuredGenerator>,
        itineraries: Arc<dyn ItineraryRepository>,
    ) -> Self {
        Self {
            generator,
            itineraries,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateItineraryCommand,
    ) -> Result<Vec<ItineraryDay>, GenerateItineraryError> {
        let request = ItineraryRequest::new(
            cmd.main_destination,
            cmd.other_destinations,
            &cmd.start_date,
            &cmd.end_date,
            cmd.interests,
            cmd.preferences,
        )?;

        tracing::info!(
            destination = %request.main_destination(),
            days = request.duration_days(),
            "generating itinerary"
        );

        let values = self
            .generator
            .generate(StructuredRequest::new(
                GenerationKind::Itinerary,
                ITINERARY_SYSTEM_PROMPT,
                itinerary_instruction(&request),
            ))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "itinerary generation failed");
                e
            })?;
        let days: Vec<ItineraryDay> = decode_records(values).map_err(|e| {
            tracing::error!(error = %e, "itinerary reply did not match the day schema");
            GenerationError::from(e)
        })?;

        self.itineraries
            .create(NewItinerary::from_request(cmd.user_id, &request, days.clone()))
            .await?;

        Ok(days)
    }
}
