//! Route configuration for currency endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{convert_currency, get_dolar_rate, get_exchange_rates};
use crate::adapters::http::state::TravelAppState;

/// Routes:
/// - `GET /api/currency/rates` - Current rate table
/// - `POST /api/currency/convert` - Conversion between two codes
/// - `GET /api/currency/dolar` - Dollar quote in reais
pub fn currency_router() -> Router<TravelAppState> {
    Router::new()
        .route("/api/currency/rates", get(get_exchange_rates))
        .route("/api/currency/convert", post(convert_currency))
        .route("/api/currency/dolar", get(get_dolar_rate))
}
