//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod checklist;
pub mod currency;
pub mod destination;
pub mod itinerary;
