//! Route configuration for health, destinations and saved records.

use axum::{routing::get, Router};

use super::handlers::{health, list_user_checklists, list_user_itineraries, search_destinations};
use crate::adapters::http::state::TravelAppState;

/// Routes:
/// - `GET /api/health` - Liveness
/// - `GET /api/destinations` - Catalog search
/// - `GET /api/user/itineraries` - Saved itineraries
/// - `GET /api/user/checklists` - Saved checklists
pub fn catalog_router() -> Router<TravelAppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/destinations", get(search_destinations))
        .route("/api/user/itineraries", get(list_user_itineraries))
        .route("/api/user/checklists", get(list_user_checklists))
}
