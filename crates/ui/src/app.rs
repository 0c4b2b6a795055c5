use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ActiveQuiz, AuthState, LastScore};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // App-wide signals: the auth cache seeded from the persisted record,
    // the single active quiz session, and the last submission's score.
    use_context_provider(|| AuthState(Signal::new(ctx.initial_user())));
    use_context_provider(|| ActiveQuiz(Signal::new(None)));
    use_context_provider(|| LastScore(Signal::new(None)));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route headings live in the views.
        document::Title { "Interview Prep" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
