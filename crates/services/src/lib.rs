#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod chat_service;
pub mod error;
pub mod progress_service;
pub mod quiz;
pub mod session_context;

pub use prep_core::Clock;

pub use error::{ApiError, QuizError, SessionContextError};

pub use api::{
    ApiClient, Backend, ChatRequest, CompaniesUpdate, LoginRequest, QuizSubmission,
    RegisterRequest, RegisteredUser, StartQuizRequest, TopicsUpdate,
};
pub use app_services::AppServices;
pub use chat_service::ChatService;
pub use progress_service::ProgressService;
pub use quiz::{ExpiryAction, QuizService, QuizSession, SessionPhase, TickOutcome};
pub use session_context::{Metadata, SessionContext};
