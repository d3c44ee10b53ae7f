//! SearchDestinations query handler.

use std::sync::Arc;

use crate::domain::destination::{Destination, DestinationFilter};
use crate::domain::foundation::DomainError;
use crate::ports::DestinationCatalog;

/// Query parameters as received; blank values do not filter.
#[derive(Debug, Clone, Default)]
pub struct SearchDestinationsQuery {
    pub search: Option<String>,
    pub continent: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchDestinationsError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for SearchDestinationsError {
    fn from(err: DomainError) -> Self {
        SearchDestinationsError::Infrastructure(err.to_string())
    }
}

pub struct SearchDestinationsHandler {
    catalog: Arc<dyn DestinationCatalog>,
}

impl SearchDestinationsHandler {
    pub fn new(catalog: Arc<dyn DestinationCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: SearchDestinationsQuery,
    ) -> Result<Vec<Destination>, SearchDestinationsError> {
        let filter = DestinationFilter::new(query.search, query.continent, query.kind);
        Ok(self.catalog.search(&filter).await?)
    }
}
