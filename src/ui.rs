use crate::theme::MERIDIAN_THEME;
use crate::views::AskAi;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    rsx! {
        ThemeStyles {}
        AppHeader {}
        Hero {}
        AskAi {}
    }
}

#[component]
fn ThemeStyles() -> Element {
    rsx! {
        style { dangerous_inner_html: MERIDIAN_THEME }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header",
            span { class: "header-wordmark", "Meridian Bank" }
            button { class: "btn btn-primary", r#type: "button", "Open Account" }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Banking at your pace" }
            p { "Checking, savings, credit cards and loans from Meridian Bank." }
        }
    }
}
