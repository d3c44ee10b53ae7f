//! Full API router with cross-cutting layers.

use axum::error_handling::HandleErrorLayer;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;
use axum::{BoxError, Router};
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{assistant_router, catalog_router, currency_router, ErrorResponse, TravelAppState};
use crate::config::ServerConfig;
use crate::domain::foundation::ErrorCode;

const GENERATION_TIMED_OUT: &str =
    "O serviço de IA demorou demais para responder. Por favor, tente novamente.";
const REQUEST_FAILED: &str = "Erro interno do servidor. Por favor, tente novamente.";

/// Builds the router serving every `/api` endpoint.
///
/// Only the AI-backed routes carry the request deadline; the rest answer
/// from memory.
pub fn api_router(state: TravelAppState, server: &ServerConfig) -> Router {
    let deadline = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(deadline_failure))
        .layer(TimeoutLayer::new(server.request_timeout()));

    Router::new()
        .merge(catalog_router())
        .merge(assistant_router().route_layer(deadline))
        .merge(currency_router())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a missed deadline into the same JSON 500 as any other AI failure.
async fn deadline_failure(error: BoxError) -> Response {
    if error.is::<Elapsed>() {
        tracing::error!("AI request exceeded the server deadline");
        return ErrorResponse::new(ErrorCode::AIProviderError, GENERATION_TIMED_OUT)
            .with_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    tracing::error!(error = %error, "AI request failed in middleware");
    ErrorResponse::internal(REQUEST_FAILED).with_status(StatusCode::INTERNAL_SERVER_ERROR)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
