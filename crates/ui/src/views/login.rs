use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{AuthState, ViewError};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let session = ctx.session();
        let email = email().trim().to_string();
        let password = password();
        let mut auth = auth;
        spawn(async move {
            match session.login(&email, &password).await {
                Ok(user) => {
                    auth.0.set(Some(user));
                    navigator.replace(Route::Dashboard {});
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
            div { class: "auth-card",
                h1 { "Interview Prep" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }

                div { class: "form-row",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-row",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Logging in..." } else { "Login" }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
