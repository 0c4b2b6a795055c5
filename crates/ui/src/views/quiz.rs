use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use prep_core::model::{Question, QuestionType};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ActiveQuiz, LastScore, ViewError};
use crate::vm::{QuestionStatus, format_mm_ss};

/// Cloned-out render data so no signal borrow is held inside `rsx!`.
#[derive(Clone, PartialEq)]
struct QuizSnapshot {
    question: Question,
    index: usize,
    len: usize,
    progress_percent: f64,
    answer: String,
    flagged: bool,
    remaining: Option<u32>,
    statuses: Vec<QuestionStatus>,
    expiry_prompt: bool,
    notice: Option<String>,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut active_quiz = use_context::<ActiveQuiz>();
    let last_score = use_context::<LastScore>();
    let navigator = use_navigator();

    let mut submitting = use_signal(|| false);
    let mut show_end_confirm = use_signal(|| false);

    // 1 Hz countdown driver. The handle dies with the view, and the
    // machine ignores ticks whenever it is not actively timing, so a
    // stray wakeup after a transition is harmless.
    use_future(move || {
        let mut active_quiz = active_quiz;
        async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                let ticking = active_quiz
                    .0
                    .peek()
                    .as_ref()
                    .is_some_and(|vm| vm.timer_active());
                if ticking {
                    let mut guard = active_quiz.0.write();
                    if let Some(vm) = guard.as_mut() {
                        vm.tick();
                    }
                }
            }
        }
    });

    let submit = use_callback(move |(): ()| {
        if submitting() {
            return;
        }
        let Some(mut vm) = active_quiz.0.write().take() else {
            return;
        };
        vm.dismiss_expiry_prompt();
        submitting.set(true);

        let quiz_service = ctx.quiz();
        let mut active_quiz = active_quiz;
        let mut last_score = last_score;
        spawn(async move {
            match quiz_service.submit(vm.session_mut()).await {
                Ok(score) => {
                    // The session is dropped here: completion returns the
                    // client to idle with the score on the dashboard.
                    last_score.0.set(Some(score));
                    submitting.set(false);
                    navigator.replace(Route::Dashboard {});
                }
                Err(err) => {
                    // Failed submission: the machine reverted to
                    // in-progress with the answer map intact, so hand the
                    // attempt back for a retry.
                    vm.note_submit_failure(ViewError::from_quiz(&err).message().to_string());
                    active_quiz.0.set(Some(vm));
                    submitting.set(false);
                }
            }
        });
    });

    let snapshot = {
        let guard = active_quiz.0.read();
        guard.as_ref().map(|vm| QuizSnapshot {
            question: vm.current_question().clone(),
            index: vm.current_index(),
            len: vm.len(),
            progress_percent: vm.progress_percent(),
            answer: vm.current_answer().unwrap_or_default().to_string(),
            flagged: vm.current_flagged(),
            remaining: vm.remaining_secs(),
            statuses: (0..vm.len()).map(|i| vm.status_of(i)).collect(),
            expiry_prompt: vm.expiry_prompt(),
            notice: vm.notice().map(str::to_string),
        })
    };

    if submitting() {
        return rsx! {
            div { class: "page",
                h2 { "Quiz in Progress" }
                p { "Submitting..." }
            }
        };
    }

    let Some(snapshot) = snapshot else {
        // Reached without an attempt (e.g. after reload): there is no
        // local persistence of in-progress sessions, so route back.
        return rsx! {
            div { class: "page",
                h2 { "No active quiz" }
                p { "Start a new practice session to get going." }
                Link { class: "btn btn-primary", to: Route::Practice { mentor: None },
                    "Go to Practice"
                }
            }
        };
    };

    let question_number = snapshot.index + 1;
    let on_last = snapshot.index + 1 == snapshot.len;
    let question_id = snapshot.question.id.clone();
    let difficulty_class = format!(
        "badge badge--{}",
        snapshot.question.difficulty.label().to_lowercase().replace(' ', "-")
    );

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                h2 { "Quiz in Progress" }
                div { class: "quiz-header-side",
                    if let Some(remaining) = snapshot.remaining {
                        span {
                            class: if remaining < 10 { "quiz-timer quiz-timer--danger" } else { "quiz-timer" },
                            "⏱ {format_mm_ss(remaining)}"
                        }
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| show_end_confirm.set(true),
                        "End Quiz"
                    }
                }
            }

            div { class: "bar-track bar-track--thick",
                div { class: "bar-fill", style: "width: {snapshot.progress_percent}%" }
            }
            p { class: "quiz-position", "Question {question_number} of {snapshot.len}" }

            if let Some(notice) = snapshot.notice.clone() {
                p { class: "quiz-notice", "{notice}" }
            }

            section { class: "panel question-card",
                div { class: "question-meta",
                    span { class: "{difficulty_class}", "{snapshot.question.difficulty}" }
                    span { class: "question-topic", "{snapshot.question.topic}" }
                    if let Some(company) = snapshot.question.company.clone() {
                        span { class: "question-company", "🏢 {company}" }
                    }
                }

                h3 { class: "question-text", "{snapshot.question.text}" }

                if let Some(link) = snapshot.question.source_link() {
                    p { class: "question-source",
                        "Source: "
                        a { href: "{link}", target: "_blank",
                            {snapshot.question.source_label().unwrap_or_default()}
                        }
                    }
                }

                match snapshot.question.question_type {
                    QuestionType::Mcq => rsx! {
                        div { class: "option-list",
                            for option in snapshot.question.option_list().to_vec() {
                                {
                                    let selected = snapshot.answer == option;
                                    let value = option.clone();
                                    rsx! {
                                        label {
                                            class: if selected { "option option--selected" } else { "option" },
                                            key: "{option}",
                                            input {
                                                r#type: "radio",
                                                name: "question-{question_id}",
                                                checked: selected,
                                                onchange: move |_| {
                                                    let mut guard = active_quiz.0.write();
                                                    if let Some(vm) = guard.as_mut() {
                                                        vm.answer(value.clone());
                                                    }
                                                },
                                            }
                                            span { "{option}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    QuestionType::Descriptive => rsx! {
                        textarea {
                            class: "answer-input",
                            rows: 6,
                            placeholder: "Type your answer here...",
                            value: "{snapshot.answer}",
                            oninput: move |evt| {
                                let mut guard = active_quiz.0.write();
                                if let Some(vm) = guard.as_mut() {
                                    vm.answer(evt.value());
                                }
                            },
                        }
                    },
                }

                div { class: "quiz-nav",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: snapshot.index == 0,
                        onclick: move |_| {
                            let mut guard = active_quiz.0.write();
                            if let Some(vm) = guard.as_mut() {
                                vm.previous();
                            }
                        },
                        "← Previous"
                    }
                    button {
                        class: if snapshot.flagged { "btn btn-secondary btn--flagged" } else { "btn btn-secondary" },
                        r#type: "button",
                        onclick: move |_| {
                            let mut guard = active_quiz.0.write();
                            if let Some(vm) = guard.as_mut() {
                                vm.toggle_flag();
                            }
                        },
                        if snapshot.flagged { "⚑ Unflag" } else { "⚐ Flag" }
                    }
                    if !on_last {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut guard = active_quiz.0.write();
                                if let Some(vm) = guard.as_mut() {
                                    vm.skip();
                                }
                            },
                            "Skip"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut guard = active_quiz.0.write();
                                if let Some(vm) = guard.as_mut() {
                                    vm.next();
                                }
                            },
                            "Next →"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| submit.call(()),
                            "Submit Quiz"
                        }
                    }
                }
            }

            section { class: "panel",
                h4 { "Question Overview" }
                div { class: "overview-grid",
                    for (index, status) in snapshot.statuses.iter().copied().enumerate() {
                        {
                            let cell_class = status.class();
                            let label = index + 1;
                            rsx! {
                                button {
                                    class: "{cell_class}",
                                    r#type: "button",
                                    key: "{index}",
                                    onclick: move |_| {
                                        let mut guard = active_quiz.0.write();
                                        if let Some(vm) = guard.as_mut() {
                                            vm.jump(index);
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            if snapshot.expiry_prompt {
                div { class: "dialog-backdrop",
                    div { class: "dialog",
                        h3 { "Time's up!" }
                        p { "Submit the quiz now, or continue without the timer?" }
                        div { class: "dialog-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut guard = active_quiz.0.write();
                                    if let Some(vm) = guard.as_mut() {
                                        vm.continue_untimed();
                                    }
                                },
                                "Continue Untimed"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| submit.call(()),
                                "Submit Now"
                            }
                        }
                    }
                }
            }

            if show_end_confirm() {
                div { class: "dialog-backdrop",
                    div { class: "dialog",
                        h3 { "End this quiz?" }
                        p { "Your progress will be lost. Nothing is sent to the server." }
                        div { class: "dialog-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| show_end_confirm.set(false),
                                "Keep Going"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| {
                                    // Abandon: discard the session without
                                    // contacting the backend.
                                    let mut active_quiz = active_quiz;
                                    active_quiz.0.set(None);
                                    show_end_confirm.set(false);
                                    navigator.replace(Route::Dashboard {});
                                },
                                "End Quiz"
                            }
                        }
                    }
                }
            }
        }
    }
}
