//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - OpenAI completion and assistant clients, structured generators, mocks
//! - `storage` - In-memory store holding seed data and generated records
//! - `http` - Axum routers exposing the JSON API

pub mod ai;
pub mod http;
pub mod storage;

pub use http::{api_router, TravelAppState};
pub use storage::InMemoryTravelStore;
