use std::sync::Arc;

use storage::{JsonFileStore, SessionStore};

use crate::api::{ApiClient, Backend};
use crate::chat_service::ChatService;
use crate::progress_service::ProgressService;
use crate::quiz::QuizService;
use crate::session_context::SessionContext;
use crate::Clock;

/// Assembles the app-facing service set around one backend and one store.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionContext>,
    quiz: Arc<QuizService>,
    progress: Arc<ProgressService>,
    chat: Arc<ChatService>,
}

impl AppServices {
    /// Wires services against arbitrary backend/store implementations.
    #[must_use]
    pub fn new(clock: Clock, backend: Arc<dyn Backend>, store: Arc<dyn SessionStore>) -> Self {
        let session = Arc::new(SessionContext::new(Arc::clone(&backend), store));
        let quiz = Arc::new(QuizService::new(clock, Arc::clone(&backend)));
        let progress = Arc::new(ProgressService::new(Arc::clone(&backend)));
        let chat = Arc::new(ChatService::new(backend));

        Self {
            session,
            quiz,
            progress,
            chat,
        }
    }

    /// Production wiring: HTTP backend plus a JSON file session store.
    #[must_use]
    pub fn new_http(clock: Clock, api_url: &str, store_path: &str) -> Self {
        let backend: Arc<dyn Backend> = Arc::new(ApiClient::new(api_url));
        let store: Arc<dyn SessionStore> = Arc::new(JsonFileStore::new(store_path));
        Self::new(clock, backend, store)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionContext> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }
}
