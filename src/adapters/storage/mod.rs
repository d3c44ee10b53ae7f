//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **InMemoryTravelStore** - Every store port, held in process memory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryTravelStore;
//!
//! // Running service: seed catalog, rates and demo user
//! let store = InMemoryTravelStore::seeded();
//!
//! // Tests: start empty
//! let store = InMemoryTravelStore::new();
//! ```

mod in_memory_travel_store;
mod seed;

pub use in_memory_travel_store::InMemoryTravelStore;
pub use seed::seed_destinations;
