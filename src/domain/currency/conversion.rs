//! Cross-rate conversion between two currencies of a [`RateTable`].

use serde::{Deserialize, Serialize};

use super::errors::CurrencyError;
use super::rates::RateTable;
use crate::domain::foundation::ValidationError;

/// Mock daily change reported alongside the dollar quote.
pub const MOCK_DAILY_CHANGE_PERCENT: f64 = 0.1;

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Validates and normalizes codes (trimmed, upper-cased, three letters).
    pub fn new(from: &str, to: &str, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::invalid_format(
                "amount",
                "must be a positive number",
            ));
        }
        Ok(Self {
            from: normalize_code("from", from)?,
            to: normalize_code("to", to)?,
            amount,
        })
    }
}

fn normalize_code(field: &str, code: &str) -> Result<String, ValidationError> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::invalid_format(
            field,
            "must be a 3-letter currency code",
        ));
    }
    Ok(code)
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted amount, rounded to 2 decimal places.
    pub amount: f64,
    pub from: String,
    pub to: String,
    /// Cross rate `to / from`, rounded to 4 decimal places.
    pub rate: f64,
}

/// Converts through the base currency: `amount / rate[from] * rate[to]`.
pub fn convert(table: &RateTable, request: &ConversionRequest) -> Result<Conversion, CurrencyError> {
    let from_rate = table
        .get(&request.from)
        .ok_or_else(|| CurrencyError::rate_not_found(&request.from))?;
    let to_rate = table
        .get(&request.to)
        .ok_or_else(|| CurrencyError::rate_not_found(&request.to))?;

    let in_base = request.amount / from_rate;
    Ok(Conversion {
        amount: round_to(in_base * to_rate, 2),
        from: request.from.clone(),
        to: request.to.clone(),
        rate: round_to(to_rate / from_rate, 4),
    })
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
