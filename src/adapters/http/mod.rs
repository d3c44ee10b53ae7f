//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; [`api_router`] merges them and adds the
//! cross-cutting layers.

pub mod assistant;
pub mod catalog;
pub mod common;
pub mod currency;
mod router;
mod state;

pub use assistant::assistant_router;
pub use catalog::catalog_router;
pub use common::ErrorResponse;
pub use currency::currency_router;
pub use router::api_router;
pub use state::TravelAppState;
