use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attempted/correct tallies for one topic or difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    pub attempted: u32,
    pub correct: u32,
    #[serde(default)]
    pub accuracy: f64,
}

/// One row of recent quiz activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentQuiz {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub total: u32,
    pub correct: u32,
}

/// Aggregate performance stats, computed by the backend per user.
///
/// Read-only on the client: pages only re-fetch it after events the
/// backend is expected to have processed (a quiz submission).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_quizzes: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub accuracy: f64,
    #[serde(default)]
    pub topic_performance: BTreeMap<String, BucketStats>,
    #[serde(default)]
    pub difficulty_performance: BTreeMap<String, BucketStats>,
    #[serde(default)]
    pub recent_activity: Vec<RecentQuiz>,
}

impl AnalyticsSnapshot {
    /// True when the user has not completed any quiz yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_quizzes == 0
    }
}

/// Completion tallies for one topic in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopicChecklist {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub completion_percentage: f64,
}

/// Per-topic completion stats, computed by the backend per user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChecklistSnapshot {
    #[serde(default)]
    pub checklist: BTreeMap<String, TopicChecklist>,
    pub completed_quizzes: u32,
    pub total_questions_answered: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_reports_empty() {
        assert!(AnalyticsSnapshot::default().is_empty());
    }

    #[test]
    fn snapshot_deserializes_backend_shape() {
        let json = r#"{
            "total_quizzes": 2,
            "total_questions": 10,
            "correct_answers": 7,
            "accuracy": 70.0,
            "topic_performance": {
                "Algorithms": {"attempted": 6, "correct": 4, "accuracy": 66.67}
            },
            "difficulty_performance": {},
            "recent_activity": [
                {"date": "2023-11-14T22:13:20Z", "total": 5, "correct": 4}
            ]
        }"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_quizzes, 2);
        assert_eq!(snapshot.topic_performance["Algorithms"].attempted, 6);
        assert_eq!(snapshot.recent_activity.len(), 1);
    }
}
