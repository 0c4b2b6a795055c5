use dioxus::prelude::*;

use prep_core::model::{ChatMessage, ChatRole};

use crate::context::AppContext;
use crate::views::AuthState;

const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();

    let mut transcript = use_signal(Vec::<ChatMessage>::new);
    let mut draft = use_signal(String::new);
    let mut waiting = use_signal(|| false);

    let send = use_callback(move |(): ()| {
        let message = draft().trim().to_string();
        if message.is_empty() || waiting() {
            return;
        }
        let Some(user_id) = auth.0.peek().as_ref().map(|user| user.id.clone()) else {
            return;
        };

        transcript.write().push(ChatMessage::user(message.clone()));
        draft.set(String::new());
        waiting.set(true);

        let chat = ctx.chat();
        spawn(async move {
            let reply = match chat.send(&user_id, &message).await {
                Ok(reply) => reply,
                Err(_) => FALLBACK_REPLY.to_string(),
            };
            transcript.write().push(ChatMessage::assistant(reply));
            waiting.set(false);
        });
    });

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI Interview Assistant" }
                p { class: "view-subtitle", "Get help with interview preparation." }
            }

            div { class: "chat-transcript",
                if transcript.read().is_empty() {
                    div { class: "chat-empty",
                        p { class: "chat-empty-icon", "🤖" }
                        p { "Hi! I'm your AI interview assistant." }
                        p { "Ask me anything about interview preparation!" }
                    }
                }
                for (index, message) in transcript.read().iter().enumerate() {
                    div {
                        class: match message.role {
                            ChatRole::User => "chat-bubble chat-bubble--user",
                            ChatRole::Assistant => "chat-bubble chat-bubble--assistant",
                        },
                        key: "{index}",
                        "{message.text}"
                    }
                }
                if waiting() {
                    div { class: "chat-bubble chat-bubble--assistant chat-bubble--pending",
                        "Thinking..."
                    }
                }
            }

            div { class: "chat-input-row",
                input {
                    r#type: "text",
                    class: "chat-input",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: waiting(),
                    onclick: move |_| send.call(()),
                    "Send"
                }
            }
        }
    }
}
