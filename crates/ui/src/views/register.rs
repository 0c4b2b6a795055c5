use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::RegisterRequest;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::pickers::preference_picker;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct RegisterData {
    topics: Vec<String>,
    companies: Vec<String>,
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let selected_topics = use_signal(Vec::<String>::new);
    let selected_companies = use_signal(Vec::<String>::new);
    let mut custom_topic = use_signal(String::new);
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
            Ok::<_, ViewError>(RegisterData {
                topics: metadata.topics,
                companies: metadata.companies,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let session = ctx.session();
        let custom = custom_topic().trim().to_string();
        let request = RegisterRequest {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            selected_topics: selected_topics(),
            custom_topics: if custom.is_empty() { Vec::new() } else { vec![custom] },
            target_companies: selected_companies(),
        };
        spawn(async move {
            match session.register(&request).await {
                Ok(_) => {
                    navigator.replace(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(ViewError::from_session(&err)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card auth-card--wide",
                h1 { "Create Account" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }

                div { class: "form-row",
                    label { r#for: "register-username", "Username" }
                    input {
                        id: "register-username",
                        r#type: "text",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div { class: "form-row",
                    label { r#for: "register-email", "Email" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-row",
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
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
                        {preference_picker("Select Topics".into(), data.topics.clone(), selected_topics)}

                        div { class: "form-row",
                            label { r#for: "register-custom-topic", "Custom Topic (Optional)" }
                            input {
                                id: "register-custom-topic",
                                r#type: "text",
                                placeholder: "e.g., React Native",
                                value: "{custom_topic}",
                                oninput: move |evt| custom_topic.set(evt.value()),
                            }
                        }

                        {preference_picker(
                            "Target Companies (Optional)".into(),
                            data.companies.clone(),
                            selected_companies,
                        )}
                    },
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Registering..." } else { "Register" }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
