//! HTTP handlers for health, destinations and the user's saved records.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{DestinationSearchParams, HealthResponse};
use crate::adapters::http::common::ErrorResponse;
use crate::adapters::http::state::TravelAppState;
use crate::application::handlers::checklist::ListUserChecklistsQuery;
use crate::application::handlers::itinerary::ListUserItinerariesQuery;

const DESTINATIONS_FAILED: &str = "Erro ao buscar destinos. Por favor, tente novamente.";
const ITINERARIES_FAILED: &str =
    "Erro ao buscar roteiros do usuário. Por favor, tente novamente.";
const CHECKLISTS_FAILED: &str = "Erro ao buscar listas do usuário. Por favor, tente novamente.";

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /api/destinations - Search the destination catalog
pub async fn search_destinations(
    State(state): State<TravelAppState>,
    Query(params): Query<DestinationSearchParams>,
) -> Response {
    match state.search_destinations_handler().handle(params.into()).await {
        Ok(destinations) => (StatusCode::OK, Json(destinations)).into_response(),
        Err(e) => internal_error(&e, DESTINATIONS_FAILED),
    }
}

/// GET /api/user/itineraries - Itineraries generated by the current user
pub async fn list_user_itineraries(State(state): State<TravelAppState>) -> Response {
    let query = ListUserItinerariesQuery {
        user_id: state.current_user,
    };
    match state.list_user_itineraries_handler().handle(query).await {
        Ok(itineraries) => (StatusCode::OK, Json(itineraries)).into_response(),
        Err(e) => internal_error(&e, ITINERARIES_FAILED),
    }
}

/// GET /api/user/checklists - Checklists generated by the current user
pub async fn list_user_checklists(State(state): State<TravelAppState>) -> Response {
    let query = ListUserChecklistsQuery {
        user_id: state.current_user,
    };
    match state.list_user_checklists_handler().handle(query).await {
        Ok(checklists) => (StatusCode::OK, Json(checklists)).into_response(),
        Err(e) => internal_error(&e, CHECKLISTS_FAILED),
    }
}

fn internal_error(error: &dyn std::error::Error, message: &str) -> Response {
    tracing::error!(error = %error, "catalog request failed");
    ErrorResponse::internal(message).with_status(StatusCode::INTERNAL_SERVER_ERROR)
}
