use prep_core::model::ChecklistSnapshot;

/// One per-topic completion row.
#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistRowVm {
    pub topic: String,
    pub count_label: String,
    pub percent: f64,
}

#[must_use]
pub fn map_checklist_rows(snapshot: &ChecklistSnapshot) -> Vec<ChecklistRowVm> {
    snapshot
        .checklist
        .iter()
        .map(|(topic, stats)| ChecklistRowVm {
            topic: topic.clone(),
            count_label: format!("{}/{}", stats.completed, stats.total),
            percent: stats.completion_percentage.clamp(0.0, 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::TopicChecklist;

    #[test]
    fn rows_carry_counts_and_clamped_percent() {
        let mut snapshot = ChecklistSnapshot::default();
        snapshot.checklist.insert(
            "SQL".into(),
            TopicChecklist {
                total: 10,
                completed: 4,
                pending: 6,
                completion_percentage: 40.0,
            },
        );
        let rows = map_checklist_rows(&snapshot);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count_label, "4/10");
        assert!((rows[0].percent - 40.0).abs() < f64::EPSILON);
    }
}
