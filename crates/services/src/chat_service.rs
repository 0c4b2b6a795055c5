use std::sync::Arc;

use prep_core::model::{ChatSessionId, UserId};

use crate::api::{Backend, ChatRequest};
use crate::error::ApiError;

/// Sends chat messages to the AI assistant endpoint.
///
/// One conversation id is minted per service instance, i.e. per app
/// launch. Transcripts are the view's concern; nothing is stored here.
pub struct ChatService {
    backend: Arc<dyn Backend>,
    session_id: ChatSessionId,
}

impl ChatService {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            session_id: ChatSessionId::random(),
        }
    }

    /// The conversation id sent with every message.
    #[must_use]
    pub fn session_id(&self) -> &ChatSessionId {
        &self.session_id
    }

    /// Sends one message and returns the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails; the caller decides what
    /// fallback text to show.
    pub async fn send(&self, user_id: &UserId, message: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            user_id: user_id.clone(),
            message: message.to_string(),
            session_id: self.session_id.as_str().to_string(),
        };
        self.backend.chat(&request).await
    }
}
