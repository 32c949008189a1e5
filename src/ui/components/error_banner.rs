//! Dismissible error banner

use crate::app::AppState;
use crate::store::{PlatformAction, StateHandle};
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner() -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let message = platform.read().error.clone();

    let Some(message) = message else {
        return rsx! {};
    };
    let message = if message.is_empty() {
        "An unknown error occurred.".to_string()
    } else {
        message
    };

    rsx! {
        div {
            class: "mx-6 mt-4 flex items-start gap-3 p-3 bg-[var(--bg-error-subtle)] border border-[var(--border-error-subtle)] rounded-lg animate-fade-in",
            svg {
                class: "w-4 h-4 mt-0.5 flex-shrink-0 text-[var(--text-error)]",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                line { x1: "12", y1: "8", x2: "12", y2: "12" }
                line { x1: "12", y1: "16", x2: "12.01", y2: "16" }
            }
            div {
                class: "flex-1 text-sm text-[var(--text-error)]",
                span { class: "font-semibold", "Error: " }
                "{message}"
            }
            button {
                onclick: move |_| platform.dispatch(PlatformAction::DismissError),
                class: "text-[var(--text-error)] opacity-70 hover:opacity-100 transition-opacity",
                title: "Dismiss",
                "×"
            }
        }
    }
}
