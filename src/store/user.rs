use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{marker::UserMarker, Id};

/// Role given to accounts created without an explicit one.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields required to insert a new record.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

/// Subset of mutable fields applied by [`super::Store::update`].
#[derive(Debug, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
