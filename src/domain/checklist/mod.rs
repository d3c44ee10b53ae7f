//! Checklist generation: request validation, instruction, generated items.

mod item;
mod prompt;
mod request;

pub use item::{reconcile_confirmed, ChecklistItem};
pub use prompt::{checklist_instruction, CHECKLIST_CATEGORIES, CHECKLIST_SYSTEM_PROMPT};
pub use request::ChecklistRequest;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp, UserId};

/// A generated checklist kept for its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: RecordId,
    pub user_id: UserId,
    pub destination: String,
    pub climate: String,
    pub duration: u32,
    pub trip_type: String,
    pub confirmed_items: Vec<String>,
    pub checklist_data: Vec<ChecklistItem>,
    pub created_at: Timestamp,
}

/// Fields for appending a checklist; the store assigns id and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChecklist {
    pub user_id: UserId,
    pub request: ChecklistRequest,
    pub items: Vec<ChecklistItem>,
}
