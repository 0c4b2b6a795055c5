mod service;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use service::QuizService;
pub use session::{ExpiryAction, QuizSession, SessionPhase, TickOutcome};
