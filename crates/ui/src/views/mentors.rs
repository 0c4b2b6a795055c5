use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn MentorsView() -> Element {
    let ctx = use_context::<AppContext>();

    let cards = ctx.mentors().iter().map(|mentor| {
        let first_name = mentor.name.split(' ').next().unwrap_or(mentor.name);
        let practice_label = format!("Practice with {first_name}");
        let stats_line = format!(
            "★ {} · {} questions · {}",
            mentor.rating, mentor.question_count, mentor.experience
        );
        rsx! {
            div { class: "mentor-card", key: "{mentor.id}",
                div { class: "mentor-card-head",
                    span { class: "mentor-avatar", "{mentor.avatar}" }
                    div {
                        p { class: "mentor-name", "{mentor.name}" }
                        p { class: "mentor-role", "{mentor.title} at {mentor.company}" }
                    }
                }
                p { class: "mentor-bio", "{mentor.bio}" }
                p { class: "mentor-stats", "{stats_line}" }
                div { class: "mentor-tags",
                    for skill in mentor.expertise {
                        span { class: "tag", key: "{skill}", "{skill}" }
                    }
                }
                div { class: "mentor-actions",
                    Link {
                        class: "btn btn-primary",
                        to: Route::Practice { mentor: Some(mentor.id.value()) },
                        "{practice_label}"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "{mentor.linkedin}",
                        target: "_blank",
                        "LinkedIn"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Mentors" }
                p { class: "view-subtitle",
                    "Practice with question sets curated by industry experts."
                }
            }

            div { class: "mentor-grid", {cards} }
        }
    }
}
