use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use prep_core::model::{Difficulty, Mentor, MentorId, QuizConfig, TimerExpiryPolicy};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::pickers::preference_picker;
use crate::views::{ActiveQuiz, AuthState, ViewError, ViewState, view_state_from_resource};
use crate::vm::QuizVm;

#[derive(Clone, Debug, PartialEq)]
struct PracticeData {
    topics: Vec<String>,
    companies: Vec<String>,
}

#[component]
pub fn PracticeView(mentor: Option<u64>) -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let active_quiz = use_context::<ActiveQuiz>();
    let navigator = use_navigator();

    let preselected = mentor.map(MentorId::new).and_then(Mentor::by_id);
    let user = auth.0.read().clone();

    let mut selected_topics = use_signal(|| {
        user.as_ref()
            .map_or_else(Vec::new, |user| user.selected_topics.clone())
    });
    let selected_companies = use_signal(|| {
        user.as_ref()
            .map_or_else(Vec::new, |user| user.target_companies.clone())
    });
    let mut num_questions = use_signal(|| "10".to_string());
    let mut difficulty = use_signal(|| "all".to_string());
    let mut enable_timer = use_signal(|| true);
    let mut prompt_on_expiry = use_signal(|| true);
    let mut mentor_id = use_signal(|| preselected.map(|m| m.id));
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let metadata_ctx = ctx.clone();
    let resource = use_resource(move || {
        let session = metadata_ctx.session();
        async move {
            let metadata = session
                .metadata()
                .await
                .map_err(|err| ViewError::from_session(&err))?;
            Ok::<_, ViewError>(PracticeData {
                topics: metadata.topics,
                companies: metadata.companies,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    // A mentor pick narrows the topic selection to their expertise, the
    // same way picking a mentor on the mentors page preconfigures a quiz.
    if let (Some(mentor), ViewState::Ready(data)) = (preselected, &state) {
        let narrowed = mentor.expertise_in(&data.topics);
        if !narrowed.is_empty() && selected_topics.peek().is_empty() {
            selected_topics.set(narrowed);
        }
    }

    let start_ctx = ctx.clone();
    let start = move |_| {
        if busy() {
            return;
        }
        error.set(None);

        let Ok(count) = num_questions().trim().parse::<u32>() else {
            error.set(Some(ViewError::new("Enter a question count between 1 and 50.")));
            return;
        };

        let companies = selected_companies();
        let config = QuizConfig {
            topics: selected_topics(),
            num_questions: count,
            difficulty: Difficulty::from_label(&difficulty()),
            companies: if companies.is_empty() { None } else { Some(companies) },
            enable_timer: enable_timer(),
            mentor_id: mentor_id(),
            expiry_policy: if prompt_on_expiry() {
                TimerExpiryPolicy::PromptSubmit
            } else {
                TimerExpiryPolicy::ContinueUntimed
            },
        };

        let Some(user_id) = auth.0.peek().as_ref().map(|user| user.id.clone()) else {
            error.set(Some(ViewError::new("Please log in first.")));
            return;
        };

        busy.set(true);
        let quiz_service = start_ctx.quiz();
        let mut active_quiz = active_quiz;
        spawn(async move {
            match quiz_service.start(&user_id, &config).await {
                Ok(session) => {
                    active_quiz.0.set(Some(QuizVm::new(session)));
                    navigator.push(Route::Quiz {});
                }
                Err(err) => {
                    error.set(Some(ViewError::from_quiz(&err)));
                }
            }
            busy.set(false);
        });
    };

    let selected_mentor = mentor_id().and_then(Mentor::by_id);
    let topic_count = selected_topics().len();
    let company_count = selected_companies().len();
    let difficulty_options = Difficulty::ALL.iter().map(|level| {
        let label = level.label();
        rsx! {
            option { value: "{label}", key: "{label}", "{label}" }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice Session" }
                p { class: "view-subtitle", "Configure your personalized practice session." }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err.message()}" }
            }

            if let Some(mentor) = selected_mentor {
                div { class: "mentor-banner",
                    span { class: "mentor-avatar", "{mentor.avatar}" }
                    div { class: "mentor-banner-body",
                        p { class: "mentor-name", "{mentor.name}" }
                        p { class: "mentor-role", "{mentor.title} at {mentor.company}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| mentor_id.set(None),
                        "Change Mentor"
                    }
                }
            }

            section { class: "panel",
                h3 { "Quiz Configuration" }

                div { class: "form-row",
                    label { r#for: "practice-count", "Number of Questions (1-50)" }
                    input {
                        id: "practice-count",
                        r#type: "number",
                        min: "1",
                        max: "50",
                        value: "{num_questions}",
                        oninput: move |evt| num_questions.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    label { r#for: "practice-difficulty", "Difficulty Level" }
                    select {
                        id: "practice-difficulty",
                        value: "{difficulty}",
                        onchange: move |evt| difficulty.set(evt.value()),
                        option { value: "all", "All Levels" }
                        {difficulty_options}
                    }
                }

                div { class: "form-row form-row--toggle",
                    label { r#for: "practice-timer", "Enable Timer" }
                    input {
                        id: "practice-timer",
                        r#type: "checkbox",
                        checked: enable_timer(),
                        onchange: move |evt| enable_timer.set(evt.checked()),
                    }
                }

                if enable_timer() {
                    div { class: "form-row form-row--toggle",
                        label { r#for: "practice-expiry", "Ask to submit when time runs out" }
                        input {
                            id: "practice-expiry",
                            r#type: "checkbox",
                            checked: prompt_on_expiry(),
                            onchange: move |evt| prompt_on_expiry.set(evt.checked()),
                        }
                    }
                }

                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading topics..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                    },
                    ViewState::Ready(data) => rsx! {
                        {preference_picker(
                            format!("Select Topics ({topic_count} selected)"),
                            data.topics.clone(),
                            selected_topics,
                        )}
                        {preference_picker(
                            format!("Target Companies ({company_count} selected)"),
                            data.companies.clone(),
                            selected_companies,
                        )}
                    },
                }

                button {
                    class: "btn btn-primary btn-start",
                    r#type: "button",
                    disabled: busy() || selected_topics().is_empty(),
                    onclick: start,
                    if busy() { "Starting Quiz..." } else { "Start Practice" }
                }
            }

            if selected_mentor.is_none() {
                section { class: "panel",
                    h3 { "Choose a Mentor" }
                    p { class: "view-subtitle", "Get questions from industry experts." }
                    div { class: "mentor-shortlist",
                        for mentor in ctx.mentors().iter().take(3) {
                            {
                                let id = mentor.id;
                                rsx! {
                                    button {
                                        class: "mentor-pick",
                                        r#type: "button",
                                        key: "{mentor.id}",
                                        onclick: move |_| mentor_id.set(Some(id)),
                                        span { class: "mentor-avatar", "{mentor.avatar}" }
                                        span { "{mentor.name} · {mentor.company}" }
                                    }
                                }
                            }
                        }
                    }
                    Link { class: "btn btn-secondary", to: Route::Mentors {}, "Browse All Mentors" }
                }
            }
        }
    }
}
