//! HTTP adapter for currency endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ConvertRequest;
pub use routes::currency_router;
