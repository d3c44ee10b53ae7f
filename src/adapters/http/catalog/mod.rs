//! HTTP adapter for health, destination search and saved records.

mod dto;
mod handlers;
mod routes;

pub use dto::{DestinationSearchParams, HealthResponse};
pub use routes::catalog_router;
