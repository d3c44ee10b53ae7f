//! Itinerary generation: request validation, instruction, generated plan.

mod plan;
mod prompt;
mod request;

pub use plan::{Activity, ItineraryDay};
pub use prompt::{itinerary_instruction, ITINERARY_SYSTEM_PROMPT};
pub use request::ItineraryRequest;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp, UserId};

/// A generated itinerary kept for its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: RecordId,
    pub user_id: UserId,
    pub main_destination: String,
    pub other_destinations: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub interests: Vec<String>,
    pub preferences: String,
    pub itinerary_data: Vec<ItineraryDay>,
    pub created_at: Timestamp,
}

/// Fields for appending an itinerary; the store assigns id and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItinerary {
    pub user_id: UserId,
    pub main_destination: String,
    pub other_destinations: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub interests: Vec<String>,
    pub preferences: String,
    pub itinerary_data: Vec<ItineraryDay>,
}

impl NewItinerary {
    pub fn from_request(user_id: UserId, request: &ItineraryRequest, days: Vec<ItineraryDay>) -> Self {
        Self {
            user_id,
            main_destination: request.main_destination().to_string(),
            other_destinations: request.other_destinations().to_vec(),
            start_date: request.start_date().format("%Y-%m-%d").to_string(),
            end_date: request.end_date().format("%Y-%m-%d").to_string(),
            interests: request.interests().to_vec(),
            preferences: request.preferences().to_string(),
            itinerary_data: days,
        }
    }
}
