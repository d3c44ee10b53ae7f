//! Generated day-by-day plan.

use serde::{Deserialize, Serialize};

use crate::domain::generation::{null_as_default, string_or_number};

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// Display label such as `Dia 1 - 10/06/2023`.
    pub date: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// A scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub time: String,
    pub description: String,
}
