//! Domain layer: travel records, validation rules, and generation contracts.
//!
//! Nothing here performs I/O; adapters and handlers build on these types.

pub mod chat;
pub mod checklist;
pub mod currency;
pub mod destination;
pub mod foundation;
pub mod generation;
pub mod itinerary;
pub mod user;
