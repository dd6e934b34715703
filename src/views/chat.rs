use crate::ai::{ChatEndpoint, HttpEndpoint};
use crate::bridge::{DefaultStore, default_store};
use crate::config::WidgetConfig;
use crate::markdown::markdown_to_html;
use crate::types::{ChatMessage, KeyCode, Keystroke, Role};
use crate::widget::{ChatWidget, KeyAction, PendingSend};
use dioxus::events::Key;
use dioxus::prelude::*;

const PLACEHOLDER: &str = "Type your question...";

fn keystroke(ev: &KeyboardEvent) -> Keystroke {
    let key = match ev.key() {
        Key::Enter => KeyCode::Enter,
        Key::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    };
    let modifiers = ev.modifiers();
    let modified = modifiers.shift() || modifiers.ctrl() || modifiers.alt() || modifiers.meta();
    Keystroke::new(key, modified)
}

/// Floating "Ask AI" launcher and its conversation panel.
#[component]
pub fn AskAi() -> Element {
    let config = use_context::<WidgetConfig>();
    let endpoint_url = config.endpoint.clone();
    let endpoint = use_signal(move || HttpEndpoint::new(endpoint_url));
    let mut widget = use_signal(move || {
        ChatWidget::<DefaultStore>::new(default_store(&config.app_id), config.thread_key.clone())
    });

    let dispatch = move |ticket: PendingSend| {
        let endpoint = endpoint();
        spawn(async move {
            let mut widget = widget;
            let outcome = endpoint.complete(ticket.request()).await;
            widget.write().finish_send(ticket, outcome);
        });
    };

    let open = widget.read().is_open();

    rsx! {
        button {
            class: "btn btn-primary launcher", r#type: "button",
            onclick: move |_| widget.write().toggle(),
            "💬"
            span { class: "sr-only", "Ask AI" }
        }
        if open {
            div { class: "dialog-overlay",
                onclick: move |_| widget.write().set_open(false),
                div { class: "dialog", role: "dialog",
                    onclick: move |ev| ev.stop_propagation(),
                    PanelHeader { on_close: move |_| widget.write().set_open(false) }
                    Transcript { widget }
                    Composer { widget, on_send: dispatch }
                }
            }
        }
    }
}

#[component]
fn PanelHeader(on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "dialog-header",
            div { class: "avatar", "AI" }
            div {
                h2 { class: "dialog-title", "Ask AI Assistant" }
                p { class: "dialog-description", "Always here to help you" }
            }
            button {
                class: "btn dialog-close", r#type: "button", title: "Close",
                onclick: move |ev| on_close.call(ev),
                "✕"
            }
        }
    }
}

#[component]
fn Transcript(widget: Signal<ChatWidget<DefaultStore>>) -> Element {
    let messages = widget.read().messages().to_vec();
    let pending = widget.read().is_pending();

    rsx! {
        div { id: "chat-list", class: "chat-list",
            if messages.is_empty() {
                div { class: "chat-empty",
                    p { "No messages yet." }
                    p { "Start a conversation by typing below!" }
                }
            }
            for (i, message) in messages.into_iter().enumerate() {
                MessageBubble { key: "{i}", message }
            }
            if pending {
                div { class: "message-row assistant",
                    div { class: "avatar", "AI" }
                    div { class: "bubble assistant typing", aria_label: "Assistant is typing",
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    match message.role {
        Role::User => rsx! {
            div { class: "message-row user",
                div { class: "bubble user", "{message.content}" }
            }
        },
        Role::Assistant => {
            let html = markdown_to_html(&message.content);
            rsx! {
                div { class: "message-row assistant",
                    div { class: "avatar", "AI" }
                    div { class: "bubble assistant md", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}

#[component]
fn Composer(
    widget: Signal<ChatWidget<DefaultStore>>,
    on_send: EventHandler<PendingSend>,
) -> Element {
    let mut widget = widget;
    let input = widget.read().input().to_string();
    let pending = widget.read().is_pending();
    let can_send = widget.read().can_send();

    rsx! {
        form { class: "composer",
            onsubmit: move |ev| ev.prevent_default(),
            textarea {
                rows: "1", placeholder: PLACEHOLDER,
                value: "{input}",
                disabled: pending, autofocus: true,
                oninput: move |ev| widget.write().set_input(ev.value()),
                onkeydown: move |ev| {
                    let stroke = keystroke(&ev);
                    if stroke.key == KeyCode::Other {
                        return;
                    }
                    if stroke.submits() {
                        ev.prevent_default();
                    }
                    let action = widget.write().handle_key(stroke);
                    if let KeyAction::Send(ticket) = action {
                        on_send.call(ticket);
                    }
                },
            }
            button {
                class: "btn btn-primary", r#type: "button",
                disabled: !can_send,
                onclick: move |_| {
                    let ticket = widget.write().begin_send();
                    if let Some(ticket) = ticket {
                        on_send.call(ticket);
                    }
                },
                "Send"
            }
        }
    }
}
