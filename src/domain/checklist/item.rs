//! Generated checklist items and confirmed-item reconciliation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::generation::{null_as_default, string_or_number};

/// One packing or preparation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked: bool,
}

/// Marks every item the user already confirmed as checked.
///
/// Matching is on trimmed, case-insensitive text. Items that were already
/// checked stay checked.
pub fn reconcile_confirmed(items: &mut [ChecklistItem], confirmed: &[String]) {
    let confirmed: HashSet<String> = confirmed
        .iter()
        .map(|text| normalize(text))
        .filter(|text| !text.is_empty())
        .collect();
    if confirmed.is_empty() {
        return;
    }

    for item in items.iter_mut() {
        if confirmed.contains(&normalize(&item.text)) {
            item.checked = true;
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
