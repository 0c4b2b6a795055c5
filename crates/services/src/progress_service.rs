use std::sync::Arc;

use prep_core::model::{AnalyticsSnapshot, ChecklistSnapshot, UserId};

use crate::api::Backend;
use crate::error::ApiError;

/// Read-only facade over the backend's aggregate views.
///
/// Snapshots are never mutated client-side, only re-fetched after events
/// the backend is expected to have processed (a quiz submission).
#[derive(Clone)]
pub struct ProgressService {
    backend: Arc<dyn Backend>,
}

impl ProgressService {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Aggregate performance stats for the user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn analytics(&self, user_id: &UserId) -> Result<AnalyticsSnapshot, ApiError> {
        self.backend.analytics(user_id).await
    }

    /// Per-topic completion stats for the user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn checklist(&self, user_id: &UserId) -> Result<ChecklistSnapshot, ApiError> {
        self.backend.checklist(user_id).await
    }
}
