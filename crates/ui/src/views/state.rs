use dioxus::prelude::*;

use prep_core::model::{ScoreSummary, User};
use services::{ApiError, QuizError, SessionContextError};

use crate::vm::QuizVm;

/// Human-readable failure shown by a view.
///
/// Carries the backend's `detail` message when there is one; everything
/// else collapses to a generic line, matching the uniform error policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError(String);

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

impl ViewError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self(GENERIC_MESSAGE.to_string())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        err.detail().map_or_else(Self::unknown, Self::new)
    }

    #[must_use]
    pub fn from_session(err: &SessionContextError) -> Self {
        match err {
            SessionContextError::Api(api) => Self::from_api(api),
            SessionContextError::NotLoggedIn => Self::new("Please log in first."),
            _ => Self::unknown(),
        }
    }

    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        match err {
            QuizError::Config(config) => Self::new(config.to_string()),
            QuizError::Api(api) => Self::from_api(api),
            QuizError::Empty => Self::new("No new questions available"),
            _ => Self::unknown(),
        }
    }
}

/// Lifecycle of a view's mount-time read.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::unknown()),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// The logged-in user, shared across the view tree.
#[derive(Clone, Copy)]
pub struct AuthState(pub Signal<Option<User>>);

/// The single active quiz attempt. At most one session exists per client;
/// this signal is the only owner.
#[derive(Clone, Copy)]
pub struct ActiveQuiz(pub Signal<Option<QuizVm>>);

/// The most recent score summary, shown on the dashboard after submission.
#[derive(Clone, Copy)]
pub struct LastScore(pub Signal<Option<ScoreSummary>>);
