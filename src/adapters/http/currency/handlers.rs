//! HTTP handlers for currency endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ConvertRequest;
use crate::adapters::http::common::{invalid_request, rejected_body, ErrorResponse};
use crate::adapters::http::state::TravelAppState;
use crate::domain::currency::CurrencyError;
use crate::domain::foundation::ErrorCode;

const CONVERT_FAILED: &str = "Erro ao converter moeda. Por favor, tente novamente.";
const DOLAR_FAILED: &str = "Erro ao buscar a cotação do dólar. Por favor, tente novamente.";

/// GET /api/currency/rates - Code to rate map, base USD
pub async fn get_exchange_rates(State(state): State<TravelAppState>) -> Response {
    let table = state.get_exchange_rates_handler().handle().await;
    (StatusCode::OK, Json(table)).into_response()
}

/// POST /api/currency/convert - Convert an amount between two currencies
pub async fn convert_currency(
    State(state): State<TravelAppState>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match state.convert_currency_handler().handle(req.into()).await {
        Ok(conversion) => (StatusCode::OK, Json(conversion)).into_response(),
        Err(e) => handle_currency_error(e, CONVERT_FAILED),
    }
}

/// GET /api/currency/dolar - Dollar quote in reais
pub async fn get_dolar_rate(State(state): State<TravelAppState>) -> Response {
    match state.get_dolar_rate_handler().handle().await {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => handle_currency_error(e, DOLAR_FAILED),
    }
}

fn handle_currency_error(error: CurrencyError, message: &str) -> Response {
    match error {
        CurrencyError::Validation(e) => invalid_request(&e),
        CurrencyError::RateNotFound { code } => {
            tracing::error!(currency = %code, "exchange rate not found");
            ErrorResponse::new(ErrorCode::RateNotFound, message)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
        CurrencyError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "currency request failed");
            ErrorResponse::internal(message).with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_maps_to_400() {
        let error = CurrencyError::Validation(ValidationError::empty_field("from"));
        let response = handle_currency_error(error, CONVERT_FAILED);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_rate_maps_to_500() {
        let response = handle_currency_error(CurrencyError::rate_not_found("XYZ"), CONVERT_FAILED);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
