//! ConvertCurrency query handler.

use std::sync::Arc;

use super::get_exchange_rates::current_rates;
use crate::domain::currency::{convert, Conversion, ConversionRequest, CurrencyError};
use crate::ports::ExchangeRateRepository;

#[derive(Debug, Clone)]
pub struct ConvertCurrencyQuery {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

pub struct ConvertCurrencyHandler {
    rates: Arc<dyn ExchangeRateRepository>,
}

impl ConvertCurrencyHandler {
    pub fn new(rates: Arc<dyn ExchangeRateRepository>) -> Self {
        Self { rates }
    }

    pub async fn handle(&self, query: ConvertCurrencyQuery) -> Result<Conversion, CurrencyError> {
        let request = ConversionRequest::new(&query.from, &query.to, query.amount)?;
        let table = current_rates(self.rates.as_ref()).await;
        convert(&table, &request)
    }
}
