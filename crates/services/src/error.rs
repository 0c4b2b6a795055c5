//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::QuizConfigError;
use storage::StoreError;

/// Errors emitted by the HTTP client wrapper.
///
/// Every failure is either transport-level or a backend-surfaced message;
/// there is deliberately no retry/backoff taxonomy (the client never
/// retries automatically).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with a non-success status. `detail` carries the
    /// backend's own message when the body had one, so the UI can show it
    /// verbatim.
    #[error("{detail}")]
    Backend {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The message to surface to the user for this failure.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Errors emitted by `SessionContext`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionContextError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by the quiz session machinery.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("the quiz has no questions")]
    Empty,

    #[error("quiz session is not in progress")]
    NotInProgress,

    #[error(transparent)]
    Config(#[from] QuizConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl QuizError {
    /// The backend-provided message for this failure, when there is one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            QuizError::Api(api) => api.detail(),
            _ => None,
        }
    }
}
