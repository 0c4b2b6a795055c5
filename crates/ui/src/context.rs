use std::sync::Arc;

use prep_core::model::{Mentor, User};
use services::{ChatService, ProgressService, QuizService, SessionContext};

/// What the composition root (the `app` crate) exposes to the views.
pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionContext>;
    fn quiz(&self) -> Arc<QuizService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn chat(&self) -> Arc<ChatService>;

    /// The user restored from the session store before launch, if any.
    fn initial_user(&self) -> Option<User>;
}

/// Service handles threaded through the view tree.
#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionContext>,
    quiz: Arc<QuizService>,
    progress: Arc<ProgressService>,
    chat: Arc<ChatService>,
    initial_user: Option<User>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            quiz: app.quiz(),
            progress: app.progress(),
            chat: app.chat(),
            initial_user: app.initial_user(),
        }
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

    /// The persisted user loaded at boot; seeds the auth signal once.
    #[must_use]
    pub fn initial_user(&self) -> Option<User> {
        self.initial_user.clone()
    }

    #[must_use]
    pub fn mentors(&self) -> &'static [Mentor] {
        self.session.mentors()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
