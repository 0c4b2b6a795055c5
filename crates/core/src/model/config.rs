use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::MentorId;
use crate::model::question::Difficulty;

/// Upper bound on questions per attempt.
pub const MAX_QUESTIONS_PER_QUIZ: u32 = 50;

/// Default question count for a fresh configuration form.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("select at least one topic")]
    EmptyTopics,

    #[error("question count must be between 1 and {max}, got {got}")]
    InvalidQuestionCount { got: u32, max: u32 },
}

/// What happens when the per-question countdown reaches zero.
///
/// Both behaviors exist in the product history, so the choice is an
/// explicit policy on the configuration rather than a hardcoded branch.
/// Neither mode submits without the user confirming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerExpiryPolicy {
    /// Ask the user whether to submit now or keep going untimed.
    #[default]
    PromptSubmit,
    /// Announce expiry, disable timing, and continue.
    ContinueUntimed,
}

/// A quiz request as built on the practice page.
///
/// Validated client-side before any network call; the backend re-checks
/// everything it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub topics: Vec<String>,
    pub num_questions: u32,
    pub difficulty: Option<Difficulty>,
    pub companies: Option<Vec<String>>,
    pub enable_timer: bool,
    pub mentor_id: Option<MentorId>,
    #[serde(default)]
    pub expiry_policy: TimerExpiryPolicy,
}

impl QuizConfig {
    /// A timerless default configuration for the given topics.
    #[must_use]
    pub fn for_topics(topics: Vec<String>) -> Self {
        Self {
            topics,
            num_questions: DEFAULT_QUESTION_COUNT,
            difficulty: None,
            companies: None,
            enable_timer: true,
            mentor_id: None,
            expiry_policy: TimerExpiryPolicy::default(),
        }
    }

    /// Checks the client-side invariants: non-empty topics, count in
    /// `[1, MAX_QUESTIONS_PER_QUIZ]`.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` describing the first violated rule.
    pub fn validate(&self) -> Result<(), QuizConfigError> {
        if self.topics.is_empty() {
            return Err(QuizConfigError::EmptyTopics);
        }
        if self.num_questions == 0 || self.num_questions > MAX_QUESTIONS_PER_QUIZ {
            return Err(QuizConfigError::InvalidQuestionCount {
                got: self.num_questions,
                max: MAX_QUESTIONS_PER_QUIZ,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = QuizConfig::for_topics(vec!["Algorithms".into()]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_topics_are_rejected() {
        let config = QuizConfig::for_topics(Vec::new());
        assert_eq!(config.validate(), Err(QuizConfigError::EmptyTopics));
    }

    #[test]
    fn question_count_bounds_are_inclusive() {
        let mut config = QuizConfig::for_topics(vec!["SQL".into()]);
        config.num_questions = 1;
        assert!(config.validate().is_ok());
        config.num_questions = MAX_QUESTIONS_PER_QUIZ;
        assert!(config.validate().is_ok());
        config.num_questions = 0;
        assert!(matches!(
            config.validate(),
            Err(QuizConfigError::InvalidQuestionCount { got: 0, .. })
        ));
        config.num_questions = MAX_QUESTIONS_PER_QUIZ + 1;
        assert!(config.validate().is_err());
    }
}
