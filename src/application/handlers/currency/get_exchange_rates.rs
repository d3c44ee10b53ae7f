//! GetExchangeRates query handler.

use std::sync::Arc;

use crate::domain::currency::RateTable;
use crate::ports::ExchangeRateRepository;

/// Reads the current rate table, falling back to the seed table when the
/// store cannot be read.
pub(super) async fn current_rates(rates: &dyn ExchangeRateRepository) -> RateTable {
    match rates.list().await {
        Ok(stored) => stored.iter().collect(),
        Err(err) => {
            tracing::warn!(error = %err, "exchange rate store unavailable, serving fallback rates");
            RateTable::fallback()
        }
    }
}

pub struct GetExchangeRatesHandler {
    rates: Arc<dyn ExchangeRateRepository>,
}

impl GetExchangeRatesHandler {
    pub fn new(rates: Arc<dyn ExchangeRateRepository>) -> Self {
        Self { rates }
    }

    /// Currency code to rate, relative to USD.
    pub async fn handle(&self) -> RateTable {
        current_rates(self.rates.as_ref()).await
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTravelStore;
    use crate::domain::currency::{ExchangeRate, SEED_RATES};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    /// Rate store that always fails to read or write.
    pub(crate) struct UnreachableRates;

    #[async_trait]
    impl ExchangeRateRepository for UnreachableRates {
        async fn list(&self) -> Result<Vec<ExchangeRate>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }

        async fn find(&self, _currency_code: &str) -> Result<Option<ExchangeRate>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }

        async fn upsert(&self, _currency_code: &str, _rate: f64) -> Result<ExchangeRate, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }
    }

    #[tokio::test]
    async fn fresh_store_returns_the_nine_seed_rates() {
        let handler = GetExchangeRatesHandler::new(Arc::new(InMemoryTravelStore::seeded()));
        let table = handler.handle().await;

        assert_eq!(table.len(), SEED_RATES.len());
        for (code, rate) in SEED_RATES {
            assert_eq!(table.get(code), Some(rate), "rate for {}", code);
        }
    }

    #[tokio::test]
    async fn unreachable_store_serves_fallback_matching_seed() {
        let handler = GetExchangeRatesHandler::new(Arc::new(UnreachableRates));
        let from_fallback = handler.handle().await;

        let seeded = GetExchangeRatesHandler::new(Arc::new(InMemoryTravelStore::seeded()))
            .handle()
            .await;
        assert_eq!(from_fallback, seeded);
    }

    #[tokio::test]
    async fn empty_store_gives_empty_table() {
        let handler = GetExchangeRatesHandler::new(Arc::new(InMemoryTravelStore::new()));
        assert!(handler.handle().await.is_empty());
    }
}
