use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::model::ids::QuestionId;

/// Fallback time allowance when the backend omits an estimate.
pub const DEFAULT_TIME_ESTIMATE_SECS: u32 = 60;

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Multiple choice: the answer is one of the provided options.
    Mcq,
    /// Free text, graded semantically by the backend.
    Descriptive,
}

/// Difficulty label attached to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl Difficulty {
    /// Every difficulty in ascending order, for filter pickers.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// The wire/display label for this difficulty.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }

    /// Parses a wire label back into a difficulty.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            "Very Hard" => Some(Difficulty::VeryHard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A question as delivered inside a quiz payload.
///
/// The backend strips `correct_answer` before sending questions to the
/// client, so correctness is never decidable locally. Everything here is
/// read-only for the lifetime of the attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub ai_answer: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "default_time_estimate")]
    pub time_estimate: u32,
}

fn default_time_estimate() -> u32 {
    DEFAULT_TIME_ESTIMATE_SECS
}

impl Question {
    /// Suggested per-question time allowance in seconds.
    #[must_use]
    pub fn time_allowance_secs(&self) -> u32 {
        if self.time_estimate == 0 {
            DEFAULT_TIME_ESTIMATE_SECS
        } else {
            self.time_estimate
        }
    }

    /// The source citation as a parsed URL.
    ///
    /// Malformed citations yield `None` rather than failing the quiz.
    #[must_use]
    pub fn source_link(&self) -> Option<Url> {
        self.source_url.as_deref().and_then(|raw| Url::parse(raw).ok())
    }

    /// Display label for the citation: the source name, else the raw URL.
    #[must_use]
    pub fn source_label(&self) -> Option<&str> {
        self.source_name
            .as_deref()
            .or(self.source_url.as_deref())
    }

    /// MCQ options, empty for descriptive questions.
    #[must_use]
    pub fn option_list(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}
