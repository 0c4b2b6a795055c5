mod analytics;
mod chat;
mod config;
mod ids;
mod mentor;
mod question;
mod quiz;
mod user;

pub use analytics::{AnalyticsSnapshot, BucketStats, ChecklistSnapshot, RecentQuiz, TopicChecklist};
pub use chat::{ChatMessage, ChatRole};
pub use config::{
    DEFAULT_QUESTION_COUNT, MAX_QUESTIONS_PER_QUIZ, QuizConfig, QuizConfigError, TimerExpiryPolicy,
};
pub use ids::{ChatSessionId, MentorId, QuestionId, QuizId, UserId};
pub use mentor::Mentor;
pub use question::{DEFAULT_TIME_ESTIMATE_SECS, Difficulty, Question, QuestionType};
pub use quiz::{Quiz, ScoreSummary};
pub use user::{DEFAULT_NOTIFICATION_FREQUENCY, DEFAULT_QUIZ_GOAL, User};
