//! Currency domain: base-normalized rate tables and conversion.

mod conversion;
mod errors;
mod rates;

pub use conversion::{convert, round_to, Conversion, ConversionRequest, MOCK_DAILY_CHANGE_PERCENT};
pub use errors::CurrencyError;
pub use rates::{ExchangeRate, RateTable, BASE_CURRENCY, SEED_RATES};

use serde::{Deserialize, Serialize};

/// Dollar quote in reais, as shown on the currency page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DolarQuote {
    pub rate: f64,
    /// RFC 3339 time the quote was produced.
    pub date: String,
    /// Daily change in percent.
    pub change: f64,
}
