//! Validated checklist parameters.

use crate::domain::foundation::{require_non_empty, ValidationError};

/// Parameters driving one checklist generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRequest {
    pub destination: String,
    /// Informal climate label: frio, quente, tropical, chuvoso, instavel.
    pub climate: String,
    pub duration: u32,
    pub trip_type: String,
    pub confirmed_items: Vec<String>,
}

impl ChecklistRequest {
    pub fn new(
        destination: impl Into<String>,
        climate: impl Into<String>,
        duration: i64,
        trip_type: impl Into<String>,
        confirmed_items: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let destination = destination.into();
        let climate = climate.into();
        let trip_type = trip_type.into();
        require_non_empty("destination", &destination)?;
        require_non_empty("climate", &climate)?;
        require_non_empty("tripType", &trip_type)?;

        let duration = u32::try_from(duration)
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| {
                ValidationError::invalid_format("duration", "must be a positive number of days")
            })?;

        Ok(Self {
            destination,
            climate,
            duration,
            trip_type,
            confirmed_items,
        })
    }
}
