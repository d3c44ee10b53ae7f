//! Exchange rate repository port.
//!
//! Rates are keyed by currency code; each code appears at most once.

use crate::domain::currency::ExchangeRate;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ExchangeRateRepository: Send + Sync {
    /// All stored rates, ordered by currency code.
    async fn list(&self) -> Result<Vec<ExchangeRate>, DomainError>;

    /// The rate for one currency, if stored.
    async fn find(&self, currency_code: &str) -> Result<Option<ExchangeRate>, DomainError>;

    /// Inserts or replaces the rate for `currency_code`, stamping `last_updated`.
    async fn upsert(&self, currency_code: &str, rate: f64) -> Result<ExchangeRate, DomainError>;
}
