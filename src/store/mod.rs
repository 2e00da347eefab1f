use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::id::{marker::UserMarker, Id};

mod user;

pub use user::{NewUser, User, UserChanges, DEFAULT_ROLE};

/// In-memory collection of user records plus the id counter.
///
/// Cloning is cheap; every clone shares the same records. Id assignment
/// and all mutations happen under one lock, so concurrent requests can
/// never observe a duplicate id or lose an update.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<Id<UserMarker>, User>,
    // monotonic; never walked back on delete, so ids are never reused
    last_id: u64,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[tracing::instrument(skip_all)]
    pub fn create(&self, form: NewUser) -> User {
        let mut inner = self.lock();
        inner.last_id += 1;

        let user = User {
            id: Id::new(inner.last_id),
            name: form.name,
            email: form.email,
            role: form.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.users.insert(user.id, user.clone());
        user
    }

    #[must_use]
    pub fn get(&self, id: Id<UserMarker>) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    /// Returns every record in insertion order. Ids only grow, so
    /// walking the map in key order preserves it.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.lock().users.values().cloned().collect()
    }

    /// Applies the supplied fields to an existing record. An empty
    /// change-set succeeds without touching `updated_at`.
    #[tracing::instrument(skip_all)]
    pub fn update(&self, id: Id<UserMarker>, changes: UserChanges) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.get_mut(&id)?;

        if changes.is_empty() {
            return Some(user.clone());
        }

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = Some(Utc::now());

        Some(user.clone())
    }

    #[tracing::instrument(skip_all)]
    pub fn delete(&self, id: Id<UserMarker>) -> bool {
        self.lock().users.remove(&id).is_some()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().users.len()
    }
}
