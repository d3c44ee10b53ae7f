//! Query and response bodies for catalog and history endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::destination::SearchDestinationsQuery;

/// `?search=&continent=&type=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationSearchParams {
    pub search: Option<String>,
    pub continent: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl From<DestinationSearchParams> for SearchDestinationsQuery {
    fn from(params: DestinationSearchParams) -> Self {
        SearchDestinationsQuery {
            search: params.search,
            continent: params.continent,
            kind: params.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
