//! HTTP adapter for chat, itinerary and checklist generation.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, ChecklistParams, ItineraryParams};
pub use routes::assistant_router;
