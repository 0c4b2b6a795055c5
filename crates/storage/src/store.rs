use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use prep_core::model::User;

/// Errors surfaced by session stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence seam for the cached user record.
///
/// The client keeps exactly one record: the last user the backend returned,
/// used to skip re-login on the next launch. The store is injected into the
/// session context so tests can swap in `MemoryStore`; nothing else in the
/// application touches disk.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted user, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for unreadable backing storage. A missing or
    /// corrupt record is `Ok(None)`, not an error.
    async fn load(&self) -> Result<Option<User>, StoreError>;

    /// Persist the user record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be written.
    async fn save(&self, user: &User) -> Result<(), StoreError>;

    /// Remove the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be removed.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    user: Arc<Mutex<Option<User>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> Result<Option<User>, StoreError> {
        Ok(self.user.lock().map_or(None, |guard| guard.clone()))
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.user.lock() {
            *guard = Some(user.clone());
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.user.lock() {
            *guard = None;
        }
        Ok(())
    }
}
