//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Chat handlers
    chat::{ChatSettings, SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler},
    // Checklist handlers
    checklist::{
        GenerateChecklistCommand, GenerateChecklistError, GenerateChecklistHandler,
        ListUserChecklistsError, ListUserChecklistsHandler, ListUserChecklistsQuery,
    },
    // Currency handlers
    currency::{
        ConvertCurrencyHandler, ConvertCurrencyQuery, GetDolarRateHandler,
        GetExchangeRatesHandler, RefreshExchangeRatesHandler,
    },
    // Destination handlers
    destination::{SearchDestinationsError, SearchDestinationsHandler, SearchDestinationsQuery},
    // Itinerary handlers
    itinerary::{
        GenerateItineraryCommand, GenerateItineraryError, GenerateItineraryHandler,
        ListUserItinerariesError, ListUserItinerariesHandler, ListUserItinerariesQuery,
    },
};
