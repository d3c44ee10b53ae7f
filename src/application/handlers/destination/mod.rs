//! Destination catalog queries.

mod search_destinations;

pub use search_destinations::{
    SearchDestinationsError, SearchDestinationsHandler, SearchDestinationsQuery,
};
