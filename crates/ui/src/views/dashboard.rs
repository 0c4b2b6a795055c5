use dioxus::prelude::*;
use dioxus_router::Link;

use prep_core::model::AnalyticsSnapshot;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{AuthState, LastScore, ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_stat_tiles, map_topic_bars};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    analytics: AnalyticsSnapshot,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let last_score = use_context::<LastScore>();
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
            Ok::<_, ViewError>(DashboardData { analytics })
        }
    });
    let state = view_state_from_resource(&resource);
    let score = last_score.0.read().clone();

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
                p { class: "view-subtitle", "Your preparation at a glance." }
            }

            if let Some(score) = score {
                div { class: "score-banner",
                    p {
                        "Quiz completed! Score: {score.correct_answers}/{score.total_questions}"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut last_score = last_score;
                            last_score.0.set(None);
                        },
                        "Dismiss"
                    }
                }
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
                    div { class: "stat-row",
                        for tile in map_stat_tiles(&data.analytics) {
                            div { class: "stat-tile", key: "{tile.label}",
                                p { class: "stat-label", "{tile.label}" }
                                p { class: "stat-value", "{tile.value}" }
                            }
                        }
                    }

                    if data.analytics.is_empty() {
                        div { class: "empty-card",
                            p { "No quizzes yet. Configure a practice session to get started." }
                            Link { class: "btn btn-primary", to: Route::Practice { mentor: None },
                                "Start Practicing"
                            }
                        }
                    } else {
                        section { class: "panel",
                            h3 { "Performance by Topic" }
                            if data.analytics.topic_performance.is_empty() {
                                p { "No topic data yet." }
                            } else {
                                ul { class: "bar-list",
                                    for bar in map_topic_bars(&data.analytics) {
                                        li { key: "{bar.topic}",
                                            div { class: "bar-header",
                                                span { "{bar.topic}" }
                                                span { class: "bar-accuracy", "{bar.accuracy_label}" }
                                            }
                                            div { class: "bar-track",
                                                div {
                                                    class: "bar-fill",
                                                    style: "width: {bar.percent}%",
                                                }
                                            }
                                            p { class: "bar-detail", "{bar.detail_label}" }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "quick-links",
                            Link { class: "btn btn-primary", to: Route::Practice { mentor: None },
                                "Start New Quiz"
                            }
                            Link { class: "btn btn-secondary", to: Route::Chat {},
                                "Chat with AI Assistant"
                            }
                        }
                    }
                },
            }
        }
    }
}
