//! Destination catalog port.

use crate::domain::destination::{Destination, DestinationFilter, NewDestination};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Read/write access to the destination catalog.
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// Destinations matching `filter`, in catalog order.
    async fn search(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, DomainError>;

    /// Adds a catalog entry and returns it with its assigned id.
    async fn add(&self, destination: NewDestination) -> Result<Destination, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn DestinationCatalog) {}
    }
}
