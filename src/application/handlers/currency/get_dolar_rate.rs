//! GetDolarRate query handler.

use std::sync::Arc;

use super::get_exchange_rates::current_rates;
use crate::domain::currency::{CurrencyError, DolarQuote, MOCK_DAILY_CHANGE_PERCENT};
use crate::domain::foundation::Timestamp;
use crate::ports::ExchangeRateRepository;

const REAL_CODE: &str = "BRL";

/// Quotes the dollar in reais. The daily change is a fixed stand-in value.
pub struct GetDolarRateHandler {
    rates: Arc<dyn ExchangeRateRepository>,
}

impl GetDolarRateHandler {
    pub fn new(rates: Arc<dyn ExchangeRateRepository>) -> Self {
        Self { rates }
    }

    pub async fn handle(&self) -> Result<DolarQuote, CurrencyError> {
        let table = current_rates(self.rates.as_ref()).await;
        let rate = table
            .get(REAL_CODE)
            .ok_or_else(|| CurrencyError::rate_not_found(REAL_CODE))?;

        Ok(DolarQuote {
            rate,
            date: Timestamp::now().to_rfc3339(),
            change: MOCK_DAILY_CHANGE_PERCENT,
        })
    }
}
