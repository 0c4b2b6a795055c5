use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;

use prep_core::model::{AnalyticsSnapshot, ChecklistSnapshot, Quiz, ScoreSummary, User, UserId};

use crate::api::dto::{
    ChatReply, ChatRequest, CompaniesResponse, CompaniesUpdate, ErrorBody, LoginRequest,
    QuizSubmission, RegisterRequest, RegisteredUser, StartQuizRequest, TopicsResponse,
    TopicsUpdate,
};
use crate::api::Backend;
use crate::error::ApiError;

/// Base URL used when neither flag nor environment overrides it.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable consulted by `ApiClient::from_env`.
pub const API_URL_ENV: &str = "PREP_API_URL";

/// Thin `reqwest` wrapper around the backend REST endpoints.
///
/// Forwards JSON payloads as-is and maps non-success statuses to the
/// backend's `detail` message. Requests are not cancelable mid-flight and
/// nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL (e.g. `http://host/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client from `PREP_API_URL`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Surfaces the backend `detail` message for non-success statuses.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("request failed with status {status}"),
    };
    tracing::debug!(%status, detail, "backend error");
    Err(ApiError::Backend { status, detail })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait]
impl Backend for ApiClient {
    async fn topics(&self) -> Result<Vec<String>, ApiError> {
        let body: TopicsResponse = self.get_json("/metadata/topics").await?;
        Ok(body.topics)
    }

    async fn companies(&self) -> Result<Vec<String>, ApiError> {
        let body: CompaniesResponse = self.get_json("/metadata/companies").await?;
        Ok(body.companies)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        self.post_json("/users/register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.post_json("/users/login", request).await
    }

    async fn update_topics(
        &self,
        user_id: &UserId,
        update: &TopicsUpdate,
    ) -> Result<(), ApiError> {
        self.put_json(&format!("/users/{user_id}/topics"), update)
            .await
    }

    async fn update_companies(
        &self,
        user_id: &UserId,
        update: &CompaniesUpdate,
    ) -> Result<(), ApiError> {
        self.put_json(&format!("/users/{user_id}/companies"), update)
            .await
    }

    async fn analytics(&self, user_id: &UserId) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(&format!("/analytics/{user_id}")).await
    }

    async fn checklist(&self, user_id: &UserId) -> Result<ChecklistSnapshot, ApiError> {
        self.get_json(&format!("/checklist/{user_id}")).await
    }

    async fn start_quiz(&self, request: &StartQuizRequest) -> Result<Quiz, ApiError> {
        self.post_json("/quiz/start", request).await
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<ScoreSummary, ApiError> {
        self.post_json("/quiz/submit", submission).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let body: ChatReply = self.post_json("/ai/chat", request).await?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/quiz/start"), "http://localhost:8000/api/quiz/start");
    }
}
