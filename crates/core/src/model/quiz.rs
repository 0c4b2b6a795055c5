use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::question::Question;

/// A server-issued quiz: an identifier plus an ordered question sequence.
///
/// Immutable once received; owned exclusively by the active quiz session
/// for the duration of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz_id: QuizId,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub enable_timer: bool,
}

impl Quiz {
    /// Number of questions in the attempt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the backend returned no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if in range.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// True if `id` belongs to this quiz's question sequence.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|q| q.id == *id)
    }
}

/// Score summary returned by the backend after submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub quiz_id: QuizId,
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Per-question verdicts: question id to correct/incorrect.
    #[serde(default)]
    pub scores: HashMap<QuestionId, bool>,
}

impl ScoreSummary {
    /// Accuracy for the attempt, in percent. Zero questions scores zero.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0
        }
    }
}
