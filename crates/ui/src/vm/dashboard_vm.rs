use prep_core::model::AnalyticsSnapshot;

/// One stat tile on the dashboard header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
}

/// One topic performance bar.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicBarVm {
    pub topic: String,
    pub accuracy_label: String,
    pub detail_label: String,
    pub percent: f64,
}

#[must_use]
pub fn map_stat_tiles(snapshot: &AnalyticsSnapshot) -> Vec<StatTileVm> {
    vec![
        StatTileVm {
            label: "Total Quizzes",
            value: snapshot.total_quizzes.to_string(),
        },
        StatTileVm {
            label: "Questions Answered",
            value: snapshot.total_questions.to_string(),
        },
        StatTileVm {
            label: "Correct Answers",
            value: snapshot.correct_answers.to_string(),
        },
        StatTileVm {
            label: "Accuracy",
            value: format!("{:.1}%", snapshot.accuracy),
        },
    ]
}

#[must_use]
pub fn map_topic_bars(snapshot: &AnalyticsSnapshot) -> Vec<TopicBarVm> {
    snapshot
        .topic_performance
        .iter()
        .map(|(topic, stats)| TopicBarVm {
            topic: topic.clone(),
            accuracy_label: format!("{:.1}%", stats.accuracy),
            detail_label: format!("{}/{} correct", stats.correct, stats.attempted),
            percent: stats.accuracy.clamp(0.0, 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::BucketStats;

    #[test]
    fn tiles_format_accuracy_with_one_decimal() {
        let snapshot = AnalyticsSnapshot {
            total_quizzes: 3,
            total_questions: 20,
            correct_answers: 15,
            accuracy: 75.0,
            ..AnalyticsSnapshot::default()
        };
        let tiles = map_stat_tiles(&snapshot);
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[3].value, "75.0%");
    }

    #[test]
    fn topic_bars_clamp_percent() {
        let mut snapshot = AnalyticsSnapshot::default();
        snapshot.topic_performance.insert(
            "Algorithms".into(),
            BucketStats {
                attempted: 4,
                correct: 3,
                accuracy: 120.0,
            },
        );
        let bars = map_topic_bars(&snapshot);
        assert_eq!(bars[0].detail_label, "3/4 correct");
        assert!((bars[0].percent - 100.0).abs() < f64::EPSILON);
    }
}
