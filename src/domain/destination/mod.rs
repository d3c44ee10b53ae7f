//! Destination catalog entries and search.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RecordId;

/// A browsable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: RecordId,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub image: String,
    pub tag: Option<String>,
    pub tag_type: Option<String>,
    pub activities: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
}

/// Catalog fields for a new destination; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub image: String,
    pub tag: Option<String>,
    pub tag_type: Option<String>,
    pub activities: Option<String>,
    pub kind: String,
    pub description: Option<String>,
}

impl NewDestination {
    pub fn with_id(self, id: RecordId) -> Destination {
        Destination {
            id,
            name: self.name,
            country: self.country,
            continent: self.continent,
            image: self.image,
            tag: self.tag,
            tag_type: self.tag_type,
            activities: self.activities,
            kind: self.kind,
            description: self.description,
        }
    }
}

/// Search criteria; empty or absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    pub search: Option<String>,
    pub continent: Option<String>,
    pub kind: Option<String>,
}

impl DestinationFilter {
    pub fn new(search: Option<String>, continent: Option<String>, kind: Option<String>) -> Self {
        Self {
            search: non_blank(search),
            continent: non_blank(continent),
            kind: non_blank(kind),
        }
    }

    /// Free-text search looks at name, country and activities; continent
    /// and type must match exactly, ignoring case.
    pub fn matches(&self, destination: &Destination) -> bool {
        let matches_search = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            destination.name.to_lowercase().contains(&term)
                || destination.country.to_lowercase().contains(&term)
                || destination
                    .activities
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&term))
        });
        let matches_continent = self
            .continent
            .as_deref()
            .map_or(true, |c| c.to_lowercase() == destination.continent.to_lowercase());
        let matches_kind = self
            .kind
            .as_deref()
            .map_or(true, |k| k.to_lowercase() == destination.kind.to_lowercase());

        matches_search && matches_continent && matches_kind
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
