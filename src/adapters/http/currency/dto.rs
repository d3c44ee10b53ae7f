//! Request bodies for the currency endpoints.

use serde::Deserialize;

use crate::application::handlers::currency::ConvertCurrencyQuery;

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl From<ConvertRequest> for ConvertCurrencyQuery {
    fn from(req: ConvertRequest) -> Self {
        ConvertCurrencyQuery {
            from: req.from,
            to: req.to,
            amount: req.amount,
        }
    }
}
