use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use prep_core::model::{
    AnalyticsSnapshot, ChecklistSnapshot, Quiz, ScoreSummary, User, UserId,
};
use prep_core::time::{Clock, fixed_now};
use services::{
    ApiError, AppServices, Backend, ChatRequest, CompaniesUpdate, LoginRequest, QuizSubmission,
    RegisterRequest, RegisteredUser, StartQuizRequest, TopicsUpdate,
};
use storage::{MemoryStore, SessionStore};

/// Backend fake for auth/preference flows; rejects one known bad password.
#[derive(Clone, Default)]
struct AuthBackend {
    topic_updates: Arc<Mutex<Vec<TopicsUpdate>>>,
    company_updates: Arc<Mutex<Vec<CompaniesUpdate>>>,
}

fn sample_user(email: &str) -> User {
    User {
        id: UserId::new("u-1"),
        username: "dana".into(),
        email: email.into(),
        selected_topics: vec!["Algorithms".into()],
        custom_topics: Vec::new(),
        target_companies: vec!["Google".into()],
        notification_frequency: 10,
        quiz_goal: 1,
        created_at: fixed_now(),
    }
}

#[async_trait]
impl Backend for AuthBackend {
    async fn topics(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Algorithms".into(), "SQL".into()])
    }

    async fn companies(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Google".into(), "Meta".into()])
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        if request.email == "taken@example.com" {
            return Err(ApiError::Backend {
                status: reqwest::StatusCode::BAD_REQUEST,
                detail: "Email already registered".into(),
            });
        }
        Ok(RegisteredUser {
            id: UserId::new("u-2"),
            username: request.username.clone(),
            email: request.email.clone(),
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        if request.password == "wrong" {
            return Err(ApiError::Backend {
                status: reqwest::StatusCode::UNAUTHORIZED,
                detail: "Invalid password".into(),
            });
        }
        Ok(sample_user(&request.email))
    }

    async fn update_topics(&self, _: &UserId, update: &TopicsUpdate) -> Result<(), ApiError> {
        self.topic_updates.lock().unwrap().push(update.clone());
        Ok(())
    }

    async fn update_companies(&self, _: &UserId, update: &CompaniesUpdate) -> Result<(), ApiError> {
        self.company_updates.lock().unwrap().push(update.clone());
        Ok(())
    }

    async fn analytics(&self, _: &UserId) -> Result<AnalyticsSnapshot, ApiError> {
        Ok(AnalyticsSnapshot::default())
    }

    async fn checklist(&self, _: &UserId) -> Result<ChecklistSnapshot, ApiError> {
        Ok(ChecklistSnapshot::default())
    }

    async fn start_quiz(&self, _: &StartQuizRequest) -> Result<Quiz, ApiError> {
        Err(ApiError::Decode("not under test".into()))
    }

    async fn submit_quiz(&self, _: &QuizSubmission) -> Result<ScoreSummary, ApiError> {
        Err(ApiError::Decode("not under test".into()))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        Ok(format!("echo: {}", request.message))
    }
}

fn assemble() -> (AppServices, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let services = AppServices::new(
        Clock::fixed(fixed_now()),
        Arc::new(AuthBackend::default()),
        store.clone() as Arc<dyn SessionStore>,
    );
    (services, store)
}

#[tokio::test]
async fn login_caches_and_persists_the_user() {
    let (services, store) = assemble();
    let session = services.session();

    assert!(session.current_user().is_none());

    let user = session.login("dana@example.com", "pw").await.expect("login");
    assert_eq!(session.current_user(), Some(user.clone()));
    assert_eq!(store.load().await.unwrap(), Some(user));
}

#[tokio::test]
async fn rejected_login_surfaces_backend_detail() {
    let (services, _) = assemble();
    let session = services.session();

    let err = session
        .login("dana@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid password");
    assert!(session.current_user().is_none());
}

#[tokio::test]
async fn restore_trusts_the_persisted_record() {
    let (services, store) = assemble();
    let user = sample_user("dana@example.com");
    store.save(&user).await.unwrap();

    let session = services.session();
    let restored = session.restore().await.expect("restore");
    assert_eq!(restored, Some(user.clone()));
    assert_eq!(session.current_user(), Some(user));
}

#[tokio::test]
async fn logout_clears_memory_and_store() {
    let (services, store) = assemble();
    let session = services.session();
    session.login("dana@example.com", "pw").await.expect("login");

    session.logout().await.expect("logout");
    assert!(session.current_user().is_none());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn preference_updates_refresh_cache_and_store() {
    let (services, store) = assemble();
    let session = services.session();
    session.login("dana@example.com", "pw").await.expect("login");

    let updated = session
        .update_topics(vec!["SQL".into()], vec!["React Native".into()])
        .await
        .expect("update topics");
    assert_eq!(updated.selected_topics, vec!["SQL"]);
    assert_eq!(updated.custom_topics, vec!["React Native"]);

    let updated = session
        .update_companies(vec!["Meta".into()])
        .await
        .expect("update companies");
    assert_eq!(updated.target_companies, vec!["Meta"]);

    let persisted = store.load().await.unwrap().expect("persisted record");
    assert_eq!(persisted.selected_topics, vec!["SQL"]);
    assert_eq!(persisted.target_companies, vec!["Meta"]);
}

#[tokio::test]
async fn preference_update_without_login_is_rejected() {
    let (services, _) = assemble();
    let err = services
        .session()
        .update_topics(vec!["SQL".into()], Vec::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not logged in");
}

#[tokio::test]
async fn register_does_not_log_in() {
    let (services, store) = assemble();
    let session = services.session();

    let request = RegisterRequest {
        username: "kim".into(),
        email: "kim@example.com".into(),
        password: "pw".into(),
        selected_topics: vec!["Algorithms".into()],
        custom_topics: Vec::new(),
        target_companies: Vec::new(),
    };
    let registered = session.register(&request).await.expect("register");
    assert_eq!(registered.username, "kim");
    assert!(session.current_user().is_none());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn metadata_returns_both_lists() {
    let (services, _) = assemble();
    let metadata = services.session().metadata().await.expect("metadata");
    assert_eq!(metadata.topics, vec!["Algorithms", "SQL"]);
    assert_eq!(metadata.companies, vec!["Google", "Meta"]);
}

#[tokio::test]
async fn chat_round_trips_through_backend() {
    let (services, _) = assemble();
    let reply = services
        .chat()
        .send(&UserId::new("u-1"), "how do I prepare?")
        .await
        .expect("chat");
    assert_eq!(reply, "echo: how do I prepare?");
}
