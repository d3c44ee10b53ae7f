//! Validated itinerary parameters.

use chrono::{DateTime, NaiveDate};

use crate::domain::foundation::{require_non_empty, ValidationError};

/// Parameters driving one itinerary generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    main_destination: String,
    other_destinations: Vec<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    interests: Vec<String>,
    preferences: String,
}

impl ItineraryRequest {
    /// Validates the raw fields.
    ///
    /// Dates are `YYYY-MM-DD` or RFC 3339 timestamps; the end date may not
    /// precede the start date.
    pub fn new(
        main_destination: impl Into<String>,
        other_destinations: Vec<String>,
        start_date: &str,
        end_date: &str,
        interests: Vec<String>,
        preferences: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let main_destination = main_destination.into();
        require_non_empty("mainDestination", &main_destination)?;

        let start_date = parse_trip_date("startDate", start_date)?;
        let end_date = parse_trip_date("endDate", end_date)?;
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "endDate",
                "must not be before startDate",
            ));
        }

        Ok(Self {
            main_destination,
            other_destinations: other_destinations
                .into_iter()
                .filter(|d| !d.trim().is_empty())
                .collect(),
            start_date,
            end_date,
            interests,
            preferences: preferences.into(),
        })
    }

    pub fn main_destination(&self) -> &str {
        &self.main_destination
    }

    pub fn other_destinations(&self) -> &[String] {
        &self.other_destinations
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn preferences(&self) -> &str {
        &self.preferences
    }

    /// Trip length in days, counting both the first and the last day.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

fn parse_trip_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}
