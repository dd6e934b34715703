//! Meridian Bank landing page with an embedded "Ask AI" assistant widget.
//!
//! The widget state machine lives in [`widget`] and has no UI dependency. The
//! Dioxus components in `ui` and `views` (behind the `web`, `desktop` or
//! `mobile` feature) only render it.

pub mod ai;
pub mod bridge;
pub mod config;
#[cfg(any(not(target_arch = "wasm32"), feature = "dioxus"))]
pub mod logging;
pub mod markdown;
pub mod theme;
pub mod types;
pub mod widget;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
