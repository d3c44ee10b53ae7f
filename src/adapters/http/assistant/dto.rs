//! Request and response bodies for the AI-backed endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checklist::GenerateChecklistCommand;
use crate::application::handlers::itinerary::GenerateItineraryCommand;
use crate::domain::foundation::UserId;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryParams {
    pub main_destination: String,
    #[serde(default)]
    pub other_destinations: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferences: String,
}

impl ItineraryParams {
    pub fn into_command(self, user_id: UserId) -> GenerateItineraryCommand {
        GenerateItineraryCommand {
            user_id,
            main_destination: self.main_destination,
            other_destinations: self.other_destinations,
            start_date: self.start_date,
            end_date: self.end_date,
            interests: self.interests,
            preferences: self.preferences,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistParams {
    pub destination: String,
    pub climate: String,
    pub duration: i64,
    pub trip_type: String,
    #[serde(default)]
    pub confirmed_items: Vec<String>,
}

impl ChecklistParams {
    pub fn into_command(self, user_id: UserId) -> GenerateChecklistCommand {
        GenerateChecklistCommand {
            user_id,
            destination: self.destination,
            climate: self.climate,
            duration: self.duration,
            trip_type: self.trip_type,
            confirmed_items: self.confirmed_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn itinerary_params_read_camel_case_with_optional_lists() {
        let params: ItineraryParams = serde_json::from_value(json!({
            "mainDestination": "Lisboa",
            "startDate": "2024-05-01",
            "endDate": "2024-05-03"
        }))
        .unwrap();

        let cmd = params.into_command(UserId::DEMO);
        assert_eq!(cmd.main_destination, "Lisboa");
        assert!(cmd.other_destinations.is_empty());
        assert!(cmd.preferences.is_empty());
    }

    #[test]
    fn checklist_params_read_camel_case() {
        let params: ChecklistParams = serde_json::from_value(json!({
            "destination": "Oslo",
            "climate": "frio",
            "duration": 7,
            "tripType": "negócios",
            "confirmedItems": ["Casaco"]
        }))
        .unwrap();

        assert_eq!(params.trip_type, "negócios");
        assert_eq!(params.confirmed_items, vec!["Casaco".to_string()]);
    }
}
