use crate::app::AppState;
use crate::store::{self, PlatformAction, StateHandle};
use crate::types::prompt::Prompt;
use crate::ui::components::Spinner;
use crate::ui::sidebar::model_selector::Chevron;
use dioxus::prelude::*;

#[component]
pub fn PromptSelector() -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let mut show_dropdown = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let (filtered, active, application, is_loading, load_error) = {
        let state = platform.read();
        let filtered: Vec<Prompt> = state
            .prompts_for_active_application()
            .into_iter()
            .cloned()
            .collect();
        let active = filtered
            .iter()
            .find(|prompt| prompt.name == state.active_prompt_name)
            .cloned();
        (
            filtered,
            active,
            state.active_application.label().to_string(),
            state.prompts_status.is_loading(),
            state.prompts_status.error().map(str::to_string),
        )
    };
    let show_empty = active.is_none() && !is_loading;

    // Runs here rather than in the card, which unmounts once its prompt is gone
    let api = app_state.api.clone();
    let handle_delete = move |name: String| {
        let api = api.clone();
        is_deleting.set(true);
        spawn(async move {
            if let Err(e) = store::delete_prompt(api.as_ref(), &mut platform, &name).await {
                tracing::warn!("Prompt {} was not deleted: {}", name, e);
            }
            is_deleting.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-3",
            div {
                class: "flex items-center justify-between",
                span {
                    class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                    "Prompt"
                }
                div {
                    class: "flex items-center gap-1",
                    div {
                        class: "relative",
                        button {
                            onclick: move |_| show_dropdown.set(!show_dropdown()),
                            class: "flex items-center gap-1 text-xs text-[var(--text-secondary)] hover:text-[var(--accent-primary)] px-2 py-1 rounded-md hover:bg-[var(--bg-hover)] transition-colors",
                            "Switch Prompt"
                            Chevron { open: show_dropdown() }
                        }
                        if show_dropdown() {
                            div {
                                class: "absolute right-0 mt-2 w-72 bg-[var(--bg-secondary)] border border-[var(--border-subtle)] rounded-lg shadow-xl z-20 max-h-72 overflow-y-auto",
                                div {
                                    class: "p-2 border-b border-[var(--border-subtle)] text-xs font-medium text-[var(--text-secondary)]",
                                    "Available Prompts"
                                }
                                for prompt in filtered.iter().cloned() {
                                    PromptOption {
                                        key: "{prompt.name}",
                                        is_active: active.as_ref().is_some_and(|a| a.name == prompt.name),
                                        prompt,
                                        on_select: move |_| show_dropdown.set(false),
                                    }
                                }
                                if filtered.is_empty() {
                                    div { class: "p-4 text-center text-xs text-[var(--text-tertiary)]", "No prompts available for this application" }
                                }
                            }
                        }
                    }
                    button {
                        onclick: move |_| platform.dispatch(PlatformAction::StartEditing(None)),
                        class: "text-xs font-medium text-white bg-[var(--accent-primary)] hover:bg-[var(--accent-secondary)] px-2 py-1 rounded-md transition-colors",
                        "New Prompt"
                    }
                }
            }

            if is_loading {
                div {
                    class: "flex items-center justify-center gap-3 py-4 bg-[var(--bg-subtle)] border border-[var(--border-subtle)] rounded-lg",
                    Spinner { size: 16 }
                    span { class: "text-xs text-[var(--text-secondary)]", "Loading prompts..." }
                }
            }
            if let Some(error) = load_error {
                div {
                    class: "p-2 bg-[var(--bg-error-subtle)] border border-[var(--border-error-subtle)] rounded-lg text-xs text-[var(--text-error)]",
                    "{error}"
                }
            }

            if let Some(prompt) = active {
                ActivePromptCard {
                    key: "{prompt.name}",
                    prompt,
                    is_deleting: is_deleting(),
                    on_delete: handle_delete,
                }
            }
            if show_empty {
                div {
                    class: "flex items-center justify-center p-6 border border-dashed border-[var(--border-subtle)] rounded-lg text-center",
                    span { class: "text-sm text-[var(--text-tertiary)]", "No active prompt selected for {application}" }
                }
            }
        }
    }
}

/// Row in the switch-prompt dropdown
#[component]
fn PromptOption(prompt: Prompt, is_active: bool, on_select: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let name = prompt.name.clone();
    let preferred = prompt.preferred_models.join(", ");

    rsx! {
        div {
            class: "p-3 hover:bg-[var(--bg-hover)] cursor-pointer border-b border-[var(--border-subtle)] last:border-b-0",
            onclick: move |_| {
                platform.dispatch(PlatformAction::SetActivePrompt(name.clone()));
                on_select.call(());
            },
            div {
                class: "flex items-center justify-between gap-2",
                div {
                    class: "flex-1 min-w-0",
                    div { class: "text-sm font-medium text-[var(--text-primary)]", "{prompt.title}" }
                    div { class: "text-[10px] text-[var(--text-tertiary)] mt-1", "{prompt.description}" }
                    if !preferred.is_empty() {
                        div { class: "text-[10px] text-[var(--accent-primary)] mt-1", "Works with: {preferred}" }
                    }
                    if !prompt.tags.is_empty() {
                        div {
                            class: "flex gap-1 mt-1",
                            for tag in prompt.tags.iter().take(2) {
                                span {
                                    key: "{tag}",
                                    class: "px-1 py-0.5 rounded text-[10px] bg-[var(--bg-subtle)] text-[var(--text-secondary)]",
                                    "{tag}"
                                }
                            }
                        }
                    }
                }
                if is_active {
                    div { class: "w-2 h-2 rounded-full bg-[var(--success)]" }
                }
            }
        }
    }
}

#[component]
fn ActivePromptCard(prompt: Prompt, is_deleting: bool, on_delete: EventHandler<String>) -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let mut confirm_delete = use_signal(|| false);

    let preferred = prompt.preferred_models.join(", ");
    let prompt_for_edit = prompt.clone();
    let name_for_delete = prompt.name.clone();

    rsx! {
        div {
            class: "flex flex-col gap-2 p-3 rounded-lg border border-[var(--border-subtle)] bg-[var(--bg-surface)]",
            div {
                class: "flex items-center justify-between gap-2",
                span { class: "text-sm font-semibold text-[var(--text-primary)] truncate", "{prompt.title}" }
                div {
                    class: "flex gap-2 text-xs",
                    button {
                        onclick: move |_| platform.dispatch(PlatformAction::StartEditing(Some(prompt_for_edit.clone()))),
                        class: "text-[var(--accent-primary)] hover:underline",
                        "Edit"
                    }
                    if confirm_delete() {
                        button {
                            onclick: move |_| on_delete.call(name_for_delete.clone()),
                            disabled: is_deleting,
                            class: "text-[var(--text-error)] font-semibold hover:underline disabled:opacity-50",
                            if is_deleting { "Deleting..." } else { "Confirm" }
                        }
                        button {
                            onclick: move |_| confirm_delete.set(false),
                            class: "text-[var(--text-secondary)] hover:underline",
                            "Cancel"
                        }
                    } else {
                        button {
                            onclick: move |_| confirm_delete.set(true),
                            class: "text-[var(--text-error)] hover:underline",
                            "Delete"
                        }
                    }
                }
            }
            p { class: "text-xs text-[var(--text-secondary)]", "{prompt.description}" }
            div {
                class: "flex flex-wrap gap-3 text-[10px] text-[var(--text-tertiary)]",
                span { "Version: {prompt.version}" }
                if !preferred.is_empty() {
                    span { "Preferred Models: {preferred}" }
                }
            }
            if !prompt.tags.is_empty() {
                div {
                    class: "flex flex-wrap gap-1",
                    for tag in prompt.tags.iter() {
                        span {
                            key: "{tag}",
                            class: "px-2 py-0.5 rounded text-[10px] bg-[var(--accent-primary)]/10 text-[var(--accent-primary)]",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}
