use dioxus::prelude::*;

use prep_core::model::ChecklistSnapshot;

use crate::context::AppContext;
use crate::views::{AuthState, ViewError, ViewState, view_state_from_resource};
use crate::vm::map_checklist_rows;

#[derive(Clone, Debug, PartialEq)]
struct ChecklistData {
    snapshot: ChecklistSnapshot,
}

#[component]
pub fn ChecklistView() -> Element {
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
            let snapshot = progress
                .checklist(&user_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(ChecklistData { snapshot })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Progress Checklist" }
                p { class: "view-subtitle", "Per-topic completion across your selected topics." }
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
                    p { class: "checklist-summary",
                        "{data.snapshot.completed_quizzes} quizzes completed · "
                        "{data.snapshot.total_questions_answered} questions answered"
                    }

                    if data.snapshot.checklist.is_empty() {
                        p { "No topics selected yet. Pick topics in Settings to build your checklist." }
                    } else {
                        ul { class: "bar-list",
                            for row in map_checklist_rows(&data.snapshot) {
                                li { key: "{row.topic}",
                                    div { class: "bar-header",
                                        span { "{row.topic}" }
                                        span { class: "bar-accuracy", "{row.count_label}" }
                                    }
                                    div { class: "bar-track",
                                        div {
                                            class: "bar-fill bar-fill--green",
                                            style: "width: {row.percent}%",
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
