use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use prep_core::model::RecentQuiz;

use crate::context::AppContext;
use crate::views::{AuthState, ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HistoryRow {
    date_label: String,
    score_label: String,
}

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    rows: Vec<HistoryRow>,
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(
        || "Unknown date".to_string(),
        |date| date.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn map_rows(recent: &[RecentQuiz]) -> Vec<HistoryRow> {
    recent
        .iter()
        .map(|quiz| HistoryRow {
            date_label: format_date(quiz.date),
            score_label: format!("{}/{} correct", quiz.correct, quiz.total),
        })
        .collect()
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let user_id = auth.0.read().as_ref().map(|user| user.id.clone());

    let resource = use_resource(move || {
        let progress = ctx.progress();
        let user_id = user_id.clone();
        async move {
            let Some(user_id) = user_id else {
                return Err(ViewError::new("Please log in first."));
            };
            let analytics = progress
                .analytics(&user_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(HistoryData {
                rows: map_rows(&analytics.recent_activity),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "History" }
                p { class: "view-subtitle", "Your most recent quiz attempts." }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No completed quizzes yet." }
                    } else {
                        ul { class: "history-list",
                            for (index, row) in data.rows.iter().enumerate() {
                                li { class: "history-row", key: "{index}",
                                    span { class: "history-date", "{row.date_label}" }
                                    span { class: "history-score", "{row.score_label}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::time::fixed_now;

    #[test]
    fn rows_format_scores_and_missing_dates() {
        let rows = map_rows(&[
            RecentQuiz {
                date: Some(fixed_now()),
                total: 5,
                correct: 4,
            },
            RecentQuiz {
                date: None,
                total: 3,
                correct: 0,
            },
        ]);
        assert_eq!(rows[0].score_label, "4/5 correct");
        assert_eq!(rows[0].date_label, "2023-11-14 22:13");
        assert_eq!(rows[1].date_label, "Unknown date");
    }
}
