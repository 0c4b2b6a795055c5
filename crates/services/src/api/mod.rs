//! The typed HTTP boundary: one trait method per backend REST endpoint.

mod client;
mod dto;

use async_trait::async_trait;

use prep_core::model::{AnalyticsSnapshot, ChecklistSnapshot, Quiz, ScoreSummary, User, UserId};

use crate::error::ApiError;

pub use client::{API_URL_ENV, ApiClient, DEFAULT_API_URL};
pub use dto::{
    ChatRequest, CompaniesUpdate, LoginRequest, QuizSubmission, RegisterRequest, RegisteredUser,
    StartQuizRequest, TopicsUpdate,
};

/// Request surface of the interview-prep backend.
///
/// `ApiClient` is the production implementation; tests inject fakes so the
/// session machinery can be exercised without a network. The wrapper is
/// intentionally thin: no retry, no backoff, no caching, no request
/// cancellation.
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET `/metadata/topics`.
    async fn topics(&self) -> Result<Vec<String>, ApiError>;

    /// GET `/metadata/companies`.
    async fn companies(&self) -> Result<Vec<String>, ApiError>;

    /// POST `/users/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError>;

    /// POST `/users/login`.
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;

    /// PUT `/users/{id}/topics`.
    async fn update_topics(&self, user_id: &UserId, update: &TopicsUpdate)
    -> Result<(), ApiError>;

    /// PUT `/users/{id}/companies`.
    async fn update_companies(
        &self,
        user_id: &UserId,
        update: &CompaniesUpdate,
    ) -> Result<(), ApiError>;

    /// GET `/analytics/{user_id}`.
    async fn analytics(&self, user_id: &UserId) -> Result<AnalyticsSnapshot, ApiError>;

    /// GET `/checklist/{user_id}`.
    async fn checklist(&self, user_id: &UserId) -> Result<ChecklistSnapshot, ApiError>;

    /// POST `/quiz/start`.
    async fn start_quiz(&self, request: &StartQuizRequest) -> Result<Quiz, ApiError>;

    /// POST `/quiz/submit`.
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<ScoreSummary, ApiError>;

    /// POST `/ai/chat`; returns the assistant's reply text.
    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError>;
}
