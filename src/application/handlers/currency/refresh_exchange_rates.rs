//! RefreshExchangeRates command handler.
//!
//! No live feed is wired in: a refresh re-applies the seed values and
//! stamps a new update time.

use std::sync::Arc;

use crate::domain::currency::{CurrencyError, ExchangeRate, SEED_RATES};
use crate::ports::ExchangeRateRepository;

pub struct RefreshExchangeRatesHandler {
    rates: Arc<dyn ExchangeRateRepository>,
}

impl RefreshExchangeRatesHandler {
    pub fn new(rates: Arc<dyn ExchangeRateRepository>) -> Self {
        Self { rates }
    }

    /// Returns the refreshed records.
    pub async fn handle(&self) -> Result<Vec<ExchangeRate>, CurrencyError> {
        let mut refreshed = Vec::with_capacity(SEED_RATES.len());
        for (code, rate) in SEED_RATES {
            let record = self
                .rates
                .upsert(code, rate)
                .await
                .map_err(|e| CurrencyError::infrastructure(e.to_string()))?;
            refreshed.push(record);
        }

        tracing::info!(count = refreshed.len(), "exchange rates refreshed");
        Ok(refreshed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTravelStore;
    use crate::application::handlers::currency::get_exchange_rates::tests::UnreachableRates;
    use crate::domain::currency::RateTable;

    #[tokio::test]
    async fn fills_an_empty_store_with_seed_values() {
        let store = InMemoryTravelStore::new();
        let handler = RefreshExchangeRatesHandler::new(Arc::new(store.clone()));

        let refreshed = handler.handle().await.unwrap();
        assert_eq!(refreshed.len(), 9);

        let table: RateTable = store.list().await.unwrap().iter().collect();
        assert_eq!(table, RateTable::fallback());
    }

    #[tokio::test]
    async fn advances_last_updated() {
        let store = InMemoryTravelStore::seeded();
        let before = store.find("BRL").await.unwrap().unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        RefreshExchangeRatesHandler::new(Arc::new(store.clone()))
            .handle()
            .await
            .unwrap();

        let after = store.find("BRL").await.unwrap().unwrap();
        assert_eq!(after.id, before.id);
        assert!(after.last_updated.is_after(&before.last_updated));
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure_error() {
        let handler = RefreshExchangeRatesHandler::new(Arc::new(UnreachableRates));
        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, CurrencyError::Infrastructure(_)));
    }
}
