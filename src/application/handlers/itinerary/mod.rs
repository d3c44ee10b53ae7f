//! Itinerary command and query handlers.

mod generate_itinerary;
mod list_user_itineraries;

pub use generate_itinerary::{
    GenerateItineraryCommand, GenerateItineraryError, GenerateItineraryHandler,
};
pub use list_user_itineraries::{
    ListUserItinerariesError, ListUserItinerariesHandler, ListUserItinerariesQuery,
};
