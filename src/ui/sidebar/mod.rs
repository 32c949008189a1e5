//! Sidebar: application, model and prompt selection

pub mod model_selector;
pub mod params;
pub mod prompt_selector;

use crate::app::AppState;
use crate::store::{PlatformAction, StateHandle};
use crate::types::prompt::ApplicationType;
use dioxus::prelude::*;
use model_selector::{Chevron, ModelSelector};
use prompt_selector::PromptSelector;

#[component]
pub fn PlatformSelector() -> Element {
    let app_state = use_context::<AppState>();
    let base_url = app_state.api_base_url.clone();

    rsx! {
        aside {
            class: "w-80 flex-shrink-0 h-full overflow-y-auto custom-scrollbar flex flex-col gap-6 p-4 border-r border-[var(--border-subtle)] bg-[var(--bg-sidebar)]",
            div {
                class: "flex flex-col gap-1",
                h1 { class: "text-lg font-semibold text-[var(--text-primary)]", "TAP Management" }
                span { class: "text-[10px] font-mono text-[var(--text-tertiary)] truncate", title: "{base_url}", "{base_url}" }
            }
            ApplicationSelector {}
            ModelSelector {}
            PromptSelector {}
        }
    }
}

#[component]
fn ApplicationSelector() -> Element {
    let app_state = use_context::<AppState>();
    let mut show_dropdown = use_signal(|| false);

    let active = app_state.platform.read().active_application.clone();
    let others: Vec<ApplicationType> = ApplicationType::known()
        .into_iter()
        .filter(|application| *application != active)
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-3",
            div {
                class: "flex items-center justify-between",
                span {
                    class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                    "Application"
                }
                div {
                    class: "relative",
                    button {
                        onclick: move |_| show_dropdown.set(!show_dropdown()),
                        class: "flex items-center gap-1 text-xs text-[var(--text-secondary)] hover:text-[var(--accent-primary)] px-2 py-1 rounded-md hover:bg-[var(--bg-hover)] transition-colors",
                        "Switch Application"
                        Chevron { open: show_dropdown() }
                    }
                    if show_dropdown() {
                        div {
                            class: "absolute right-0 mt-2 w-72 bg-[var(--bg-secondary)] border border-[var(--border-subtle)] rounded-lg shadow-xl z-20",
                            div {
                                class: "p-2 border-b border-[var(--border-subtle)] text-xs font-medium text-[var(--text-secondary)]",
                                "Available Applications"
                            }
                            for application in others.iter().cloned() {
                                ApplicationOption {
                                    key: "{application}",
                                    application,
                                    on_select: move |_| show_dropdown.set(false),
                                }
                            }
                            if others.is_empty() {
                                div { class: "p-4 text-center text-xs text-[var(--text-tertiary)]", "No other applications available" }
                            }
                        }
                    }
                }
            }
            div {
                class: "p-3 rounded-lg border border-[var(--border-subtle)] bg-[var(--bg-surface)]",
                div { class: "text-sm font-semibold text-[var(--text-primary)]", "{active.label()}" }
                div { class: "text-xs text-[var(--text-secondary)] mt-1", "{active.description()}" }
            }
        }
    }
}

#[component]
fn ApplicationOption(application: ApplicationType, on_select: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let label = application.label().to_string();
    let description = application.description().to_string();

    rsx! {
        div {
            class: "p-3 hover:bg-[var(--bg-hover)] cursor-pointer",
            onclick: move |_| {
                platform.dispatch(PlatformAction::SetActiveApplication(application.clone()));
                on_select.call(());
            },
            div { class: "text-sm font-medium text-[var(--text-primary)]", "{label}" }
            div { class: "text-[10px] text-[var(--text-tertiary)] mt-1", "{description}" }
        }
    }
}
