use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::pickers::preference_picker;
use crate::views::{AuthState, ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct SettingsData {
    topics: Vec<String>,
    companies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
enum SaveNotice {
    Saved(&'static str),
    Failed(ViewError),
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();

    let user = auth.0.read().clone();
    let selected_topics = use_signal(|| {
        user.as_ref()
            .map_or_else(Vec::new, |user| user.selected_topics.clone())
    });
    let mut custom_topic = use_signal(|| {
        user.as_ref()
            .and_then(|user| user.custom_topics.first().cloned())
            .unwrap_or_default()
    });
    let selected_companies = use_signal(|| {
        user.as_ref()
            .map_or_else(Vec::new, |user| user.target_companies.clone())
    });
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| None::<SaveNotice>);

    let metadata_ctx = ctx.clone();
    let resource = use_resource(move || {
        let session = metadata_ctx.session();
        async move {
            let metadata = session
                .metadata()
                .await
                .map_err(|err| ViewError::from_session(&err))?;
            Ok::<_, ViewError>(SettingsData {
                topics: metadata.topics,
                companies: metadata.companies,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let topics_ctx = ctx.clone();
    let save_topics = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        notice.set(None);

        let session = topics_ctx.session();
        let selected = selected_topics();
        let custom = custom_topic().trim().to_string();
        let custom = if custom.is_empty() { Vec::new() } else { vec![custom] };
        let mut auth = auth;
        spawn(async move {
            match session.update_topics(selected, custom).await {
                Ok(user) => {
                    auth.0.set(Some(user));
                    notice.set(Some(SaveNotice::Saved("Topics updated successfully!")));
                }
                Err(err) => {
                    notice.set(Some(SaveNotice::Failed(ViewError::from_session(&err))));
                }
            }
            busy.set(false);
        });
    };

    let companies_ctx = ctx.clone();
    let save_companies = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        notice.set(None);

        let session = companies_ctx.session();
        let companies = selected_companies();
        let mut auth = auth;
        spawn(async move {
            match session.update_companies(companies).await {
                Ok(user) => {
                    auth.0.set(Some(user));
                    notice.set(Some(SaveNotice::Saved("Companies updated successfully!")));
                }
                Err(err) => {
                    notice.set(Some(SaveNotice::Failed(ViewError::from_session(&err))));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Settings" }
                p { class: "view-subtitle", "Manage your topics and target companies." }
            }

            match notice() {
                Some(SaveNotice::Saved(message)) => rsx! {
                    p { class: "form-success", "{message}" }
                },
                Some(SaveNotice::Failed(err)) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                None => rsx! {},
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
                    section { class: "panel",
                        h3 { "My Topics" }
                        {preference_picker("Available Topics".into(), data.topics.clone(), selected_topics)}
                        div { class: "form-row",
                            label { r#for: "settings-custom-topic", "Custom Topic" }
                            input {
                                id: "settings-custom-topic",
                                r#type: "text",
                                placeholder: "e.g., React Native",
                                value: "{custom_topic}",
                                oninput: move |evt| custom_topic.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: busy(),
                            onclick: save_topics,
                            "Update Topics"
                        }
                    }

                    section { class: "panel",
                        h3 { "Target Companies" }
                        {preference_picker("Available Companies".into(), data.companies.clone(), selected_companies)}
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: busy(),
                            onclick: save_companies,
                            "Update Companies"
                        }
                    }
                },
            }
        }
    }
}
