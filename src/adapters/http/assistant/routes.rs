//! Route configuration for the AI-backed endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_checklist, generate_itinerary, send_chat_message};
use crate::adapters::http::state::TravelAppState;

/// Routes:
/// - `POST /api/chat` - Travel guide chat
/// - `POST /api/itinerary` - Itinerary generation
/// - `POST /api/checklist` - Checklist generation
pub fn assistant_router() -> Router<TravelAppState> {
    Router::new()
        .route("/api/chat", post(send_chat_message))
        .route("/api/itinerary", post(generate_itinerary))
        .route("/api/checklist", post(generate_checklist))
}
