use dioxus::prelude::*;

use crate::core::state::{ChatPanel, InFlight};
use crate::core::{config, platform, timing};
use crate::t;

use super::log::{normalize_input, reply_text, ChatLog};

const CHAT_LOG_ID: &str = "chatMessages";

/// Floating assistant: toggle button plus a panel with the conversation.
#[component]
pub fn ChatWidget() -> Element {
    let mut panel = use_signal(ChatPanel::default);
    let mut log = use_signal(|| ChatLog::with_greeting(t!("chat-greeting")));
    let mut draft = use_signal(String::new);
    let mut pending = use_signal(InFlight::default);

    // Keep the newest message in view after every append (and on open).
    use_effect(move || {
        let _len = log.read().len();
        let _typing = log.read().typing().is_some();
        let _open = panel().is_open();
        spawn(async move {
            platform::scroll_to_bottom(CHAT_LOG_ID).await;
        });
    });

    let mut send = move || {
        let Some(text) = normalize_input(&draft()) else {
            return;
        };
        if !pending.write().try_begin() {
            return;
        }

        log.write().push_user(text.clone());
        draft.set(String::new());
        let token = log.write().begin_typing(timing::now_ms());

        spawn(async move {
            let result = match config::api_client() {
                Ok(client) => client.chat(&text).await,
                Err(err) => Err(err),
            };
            let reply = reply_text(result);
            {
                let mut log = log.write();
                log.end_typing(&token);
                log.push_bot(reply);
            }
            pending.write().finish();
        });
    };

    let snapshot = log.read().clone();
    let is_open = panel().is_open();
    let waiting = pending().is_busy();

    rsx! {
        div { class: "chat-widget",
            button {
                id: "chatToggle",
                r#type: "button",
                class: "chat-toggle",
                aria_label: t!("chat-toggle-label"),
                onclick: move |_| panel.set(panel().toggled()),
                i { class: if is_open { "fas fa-xmark" } else { "fas fa-comment-medical" } }
            }

            if is_open {
                div { id: "chatWindow", class: "chat-window",
                    div { class: "chat-header",
                        div { class: "chat-header__title",
                            i { class: "fas fa-robot" }
                            span { {t!("chat-title")} }
                        }
                        button {
                            id: "chatClose",
                            r#type: "button",
                            class: "chat-close",
                            aria_label: t!("chat-close-label"),
                            onclick: move |_| panel.set(panel().close()),
                            "×"
                        }
                    }

                    div { id: CHAT_LOG_ID, class: "chat-messages",
                        for message in snapshot.messages().iter() {
                            div {
                                key: "{message.id}",
                                class: "message {message.sender.css_class()}",
                                "{message.text}"
                            }
                        }
                        if let Some(token) = snapshot.typing() {
                            div {
                                key: "{token}",
                                id: "{token}",
                                class: "message bot typing-indicator",
                                div { class: "typing-dots",
                                    span {}
                                    span {}
                                    span {}
                                }
                            }
                        }
                    }

                    div { class: "chat-input-row",
                        input {
                            id: "chatInput",
                            r#type: "text",
                            class: "chat-input",
                            placeholder: t!("chat-placeholder"),
                            autocomplete: "off",
                            value: "{draft}",
                            onmounted: move |evt| async move {
                                let _ = evt.set_focus(true).await;
                            },
                            oninput: move |evt| draft.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    send();
                                }
                            },
                        }
                        button {
                            id: "chatSend",
                            r#type: "button",
                            class: "chat-send",
                            disabled: waiting,
                            aria_label: t!("chat-send-label"),
                            onclick: move |_| send(),
                            i { class: "fas fa-paper-plane" }
                        }
                    }
                }
            }
        }
    }
}
