use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// Default number of practice reminders per day.
pub const DEFAULT_NOTIFICATION_FREQUENCY: u32 = 10;

/// Default minimum quizzes to complete per day.
pub const DEFAULT_QUIZ_GOAL: u32 = 1;

/// The authenticated user record as returned by the backend.
///
/// The client treats this as a cache of the last server response: it is
/// read-only apart from preference edits, which go through the dedicated
/// update endpoints and then replace the cached copy wholesale. The same
/// shape is what the session store persists between launches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub selected_topics: Vec<String>,
    #[serde(default)]
    pub custom_topics: Vec<String>,
    #[serde(default)]
    pub target_companies: Vec<String>,
    #[serde(default = "default_notification_frequency")]
    pub notification_frequency: u32,
    #[serde(default = "default_quiz_goal")]
    pub quiz_goal: u32,
    pub created_at: DateTime<Utc>,
}

fn default_notification_frequency() -> u32 {
    DEFAULT_NOTIFICATION_FREQUENCY
}

fn default_quiz_goal() -> u32 {
    DEFAULT_QUIZ_GOAL
}

impl User {
    /// All topics the user tracks: curated selections plus custom entries.
    #[must_use]
    pub fn all_topics(&self) -> Vec<String> {
        let mut topics = self.selected_topics.clone();
        topics.extend(self.custom_topics.iter().cloned());
        topics
    }

    /// Returns a copy with replaced topic preferences.
    #[must_use]
    pub fn with_topics(mut self, selected: Vec<String>, custom: Vec<String>) -> Self {
        self.selected_topics = selected;
        self.custom_topics = custom;
        self
    }

    /// Returns a copy with replaced target companies.
    #[must_use]
    pub fn with_companies(mut self, companies: Vec<String>) -> Self {
        self.target_companies = companies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn sample_user() -> User {
        User {
            id: UserId::new("u-1"),
            username: "dana".into(),
            email: "dana@example.com".into(),
            selected_topics: vec!["Algorithms".into()],
            custom_topics: vec!["React Native".into()],
            target_companies: vec!["Google".into()],
            notification_frequency: DEFAULT_NOTIFICATION_FREQUENCY,
            quiz_goal: DEFAULT_QUIZ_GOAL,
            created_at: fixed_now(),
        }
    }

    #[test]
    fn all_topics_merges_selected_and_custom() {
        let user = sample_user();
        assert_eq!(user.all_topics(), vec!["Algorithms", "React Native"]);
    }

    #[test]
    fn with_topics_replaces_both_lists() {
        let user = sample_user().with_topics(vec!["SQL".into()], Vec::new());
        assert_eq!(user.selected_topics, vec!["SQL"]);
        assert!(user.custom_topics.is_empty());
    }

    #[test]
    fn deserializes_with_missing_preference_fields() {
        let json = r#"{
            "id": "u-2",
            "username": "kim",
            "email": "kim@example.com",
            "created_at": "2023-11-14T22:13:20Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.selected_topics.is_empty());
        assert_eq!(user.notification_frequency, DEFAULT_NOTIFICATION_FREQUENCY);
        assert_eq!(user.quiz_goal, DEFAULT_QUIZ_GOAL);
    }
}
