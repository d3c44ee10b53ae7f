//! Currency error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors from rate lookup and conversion.
#[derive(Debug, Clone, Error)]
pub enum CurrencyError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Exchange rate not found for {code}")]
    RateNotFound { code: String },

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl CurrencyError {
    pub fn rate_not_found(code: impl Into<String>) -> Self {
        Self::RateNotFound { code: code.into() }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure(message.into())
    }
}
