use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use prep_core::model::{QuestionId, QuizConfig, QuizId, UserId};

/// Body for POST `/users/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub selected_topics: Vec<String>,
    pub custom_topics: Vec<String>,
    pub target_companies: Vec<String>,
}

/// Trimmed user echo returned by registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Body for POST `/users/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for PUT `/users/{id}/topics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicsUpdate {
    pub selected_topics: Vec<String>,
    pub custom_topics: Vec<String>,
}

/// Body for PUT `/users/{id}/companies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompaniesUpdate {
    pub companies: Vec<String>,
}

/// Body for POST `/quiz/start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartQuizRequest {
    pub user_id: UserId,
    pub topics: Vec<String>,
    pub num_questions: u32,
    pub difficulty: Option<String>,
    pub companies: Option<Vec<String>>,
    pub enable_timer: bool,
    pub mentor_id: Option<u64>,
}

impl StartQuizRequest {
    /// Builds the wire request from a validated configuration.
    #[must_use]
    pub fn from_config(user_id: UserId, config: &QuizConfig) -> Self {
        Self {
            user_id,
            topics: config.topics.clone(),
            num_questions: config.num_questions,
            difficulty: config.difficulty.map(|d| d.label().to_string()),
            companies: config
                .companies
                .clone()
                .filter(|companies| !companies.is_empty()),
            enable_timer: config.enable_timer,
            mentor_id: config.mentor_id.map(|id| id.value()),
        }
    }
}

/// Body for POST `/quiz/submit`: the whole answer map plus elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub quiz_id: QuizId,
    pub user_answers: HashMap<QuestionId, String>,
    pub time_taken: u64,
}

/// Body for POST `/ai/chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub user_id: UserId,
    pub message: String,
    pub session_id: String,
}

/// Response envelope for GET `/metadata/topics`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TopicsResponse {
    pub topics: Vec<String>,
}

/// Response envelope for GET `/metadata/companies`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CompaniesResponse {
    pub companies: Vec<String>,
}

/// Response envelope for POST `/ai/chat`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatReply {
    pub response: String,
}

/// Error envelope the backend uses for non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}
