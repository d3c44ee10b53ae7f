//! Checklist command and query handlers.

mod generate_checklist;
mod list_user_checklists;

pub use generate_checklist::{
    GenerateChecklistCommand, GenerateChecklistError, GenerateChecklistHandler,
};
pub use list_user_checklists::{
    ListUserChecklistsError, ListUserChecklistsHandler, ListUserChecklistsQuery,
};
