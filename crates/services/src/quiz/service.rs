use std::sync::Arc;

use prep_core::Clock;
use prep_core::model::{QuizConfig, ScoreSummary, UserId};

use crate::api::{Backend, StartQuizRequest};
use crate::error::QuizError;
use crate::quiz::session::QuizSession;

/// Orchestrates the network transitions of a quiz attempt.
///
/// The service itself is stateless; the single active session lives with
/// the caller (the quiz view owns exactly one). Abandoning an attempt is
/// dropping the session, which deliberately contacts nobody.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    backend: Arc<dyn Backend>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, backend: Arc<dyn Backend>) -> Self {
        Self { clock, backend }
    }

    /// Validates the configuration and requests a quiz from the backend.
    ///
    /// On success the returned session is in progress at question 0, with
    /// the countdown seeded when timing is enabled. On failure the caller
    /// holds no session, which is the `Idle` state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Config` for client-side validation failures
    /// (no network call is made), `QuizError::Api` for backend failures,
    /// and `QuizError::Empty` if the backend returned no questions.
    pub async fn start(
        &self,
        user_id: &UserId,
        config: &QuizConfig,
    ) -> Result<QuizSession, QuizError> {
        config.validate()?;

        let request = StartQuizRequest::from_config(user_id.clone(), config);
        let quiz = self.backend.start_quiz(&request).await?;
        tracing::debug!(quiz_id = %quiz.quiz_id, questions = quiz.len(), "quiz started");

        QuizSession::new(quiz, config, self.clock.now())
    }

    /// Submits the attempt: the whole answer map plus elapsed seconds.
    ///
    /// Moves the session through `Submitting`; on success it ends
    /// `Completed` holding the score. On failure it reverts to
    /// `InProgress` with the answer map intact so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` if the session is not in
    /// progress, or `QuizError::Api` when the backend call fails.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<ScoreSummary, QuizError> {
        let payload = session.begin_submission(self.clock.now())?;

        match self.backend.submit_quiz(&payload).await {
            Ok(score) => {
                tracing::debug!(
                    quiz_id = %score.quiz_id,
                    correct = score.correct_answers,
                    total = score.total_questions,
                    "quiz submitted"
                );
                session.complete_submission(score.clone());
                Ok(score)
            }
            Err(err) => {
                tracing::debug!(error = %err, "quiz submission failed");
                session.fail_submission();
                Err(err.into())
            }
        }
    }
}
