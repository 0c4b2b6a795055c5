use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{
    AuthState, ChatView, ChecklistView, DashboardView, HistoryView, LoginView, MentorsView,
    PracticeView, QuizView, RegisterView, SettingsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[route("/register", RegisterView)] Register {},
    #[layout(Shell)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/practice?:mentor", PracticeView)] Practice { mentor: Option<u64> },
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/mentors", MentorsView)] Mentors {},
        #[route("/checklist", ChecklistView)] Checklist {},
        #[route("/history", HistoryView)] History {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/settings", SettingsView)] Settings {},
}

/// Sidebar shell for the signed-in pages. Redirects to the login form
/// when no user is cached.
#[component]
fn Shell() -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let logged_in = auth.0.read().is_some();

    use_effect(move || {
        if !logged_in {
            navigator.replace(Route::Login {});
        }
    });

    if !logged_in {
        return rsx! {
            div { class: "page", p { "Redirecting to login..." } }
        };
    }

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let username = auth
        .0
        .read()
        .as_ref()
        .map_or_else(String::new, |user| user.username.clone());

    rsx! {
        nav { class: "sidebar",
            h1 { "Interview Prep" }
            p { class: "sidebar-user", "Welcome, {username}" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Practice { mentor: None }, "Practice" } }
                li { Link { to: Route::Mentors {}, "Mentors" } }
                li { Link { to: Route::Checklist {}, "Checklist" } }
                li { Link { to: Route::History {}, "History" } }
                li { Link { to: Route::Chat {}, "AI Assistant" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
            button {
                class: "btn btn-logout",
                r#type: "button",
                onclick: move |_| {
                    let session = ctx.session();
                    let mut auth = auth;
                    spawn(async move {
                        // Failing to clear the store still signs the UI out.
                        let _ = session.logout().await;
                        auth.0.set(None);
                        navigator.replace(Route::Login {});
                    });
                },
                "Logout"
            }
        }
    }
}
