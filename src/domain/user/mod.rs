//! User accounts.
//!
//! There is no authentication; every generated record belongs to
//! [`UserId::DEMO`], which the store seeds at startup.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
}

/// Fields for creating a user; the store assigns id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            username: username.into(),
            email,
        }
    }

    /// The account that owns all records created through the API.
    pub fn demo() -> Self {
        Self::new("viajante", Some("viajante@example.com".to_string()))
    }
}
