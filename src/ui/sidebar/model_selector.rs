use crate::app::AppState;
use crate::store::{self, PlatformAction, StateHandle};
use crate::types::model::{ModelGenerationParams, ModelInfo};
use crate::ui::components::Spinner;
use crate::ui::sidebar::params::{GenerationParam, GenerationParamsList};
use dioxus::prelude::*;

#[component]
pub fn ModelSelector() -> Element {
    let app_state = use_context::<AppState>();
    let platform = app_state.platform.read();
    let mut show_dropdown = use_signal(|| false);

    let active = platform.active_model().cloned();
    let inactive: Vec<ModelInfo> = platform
        .models
        .iter()
        .filter(|model| model.name() != platform.active_model_name)
        .cloned()
        .collect();
    let is_loading = platform.models_status.is_loading();
    let load_error = platform.models_status.error().map(str::to_string);
    let show_empty = active.is_none() && !is_loading;

    rsx! {
        div {
            class: "flex flex-col gap-3",
            div {
                class: "flex items-center justify-between",
                span {
                    class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                    "Model"
                }
                div {
                    class: "relative",
                    button {
                        onclick: move |_| show_dropdown.set(!show_dropdown()),
                        class: "flex items-center gap-1 text-xs text-[var(--text-secondary)] hover:text-[var(--accent-primary)] px-2 py-1 rounded-md hover:bg-[var(--bg-hover)] transition-colors",
                        "Switch Model"
                        Chevron { open: show_dropdown() }
                    }
                    if show_dropdown() {
                        div {
                            class: "absolute right-0 mt-2 w-64 bg-[var(--bg-secondary)] border border-[var(--border-subtle)] rounded-lg shadow-xl z-20 max-h-64 overflow-y-auto",
                            div {
                                class: "p-2 border-b border-[var(--border-subtle)] text-xs font-medium text-[var(--text-secondary)]",
                                "Available Models"
                            }
                            for model in inactive.iter().cloned() {
                                ModelOption {
                                    key: "{model.name()}",
                                    model,
                                    on_select: move |_| show_dropdown.set(false),
                                }
                            }
                            if inactive.is_empty() {
                                div { class: "p-4 text-center text-xs text-[var(--text-tertiary)]", "No other models available" }
                            }
                        }
                    }
                }
            }

            if is_loading {
                div {
                    class: "flex items-center justify-center gap-3 py-4 bg-[var(--bg-subtle)] border border-[var(--border-subtle)] rounded-lg",
                    Spinner { size: 16 }
                    span { class: "text-xs text-[var(--text-secondary)]", "Loading models..." }
                }
            }
            if let Some(error) = load_error {
                div {
                    class: "p-2 bg-[var(--bg-error-subtle)] border border-[var(--border-error-subtle)] rounded-lg text-xs text-[var(--text-error)]",
                    "{error}"
                }
            }

            if let Some(model) = active {
                ModelCard { key: "{model.name()}", model }
            }
            if show_empty {
                div {
                    class: "flex items-center justify-center p-6 border border-dashed border-[var(--border-subtle)] rounded-lg",
                    span { class: "text-sm text-[var(--text-tertiary)]", "No active model selected" }
                }
            }
        }
    }
}

/// Row in the switch-model dropdown
#[component]
fn ModelOption(model: ModelInfo, on_select: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let name = model.name().to_string();
    let summary = model.metadata.summary();

    rsx! {
        div {
            class: "p-2 hover:bg-[var(--bg-hover)] cursor-pointer border-b border-[var(--border-subtle)] last:border-b-0",
            onclick: move |_| {
                platform.dispatch(PlatformAction::SetActiveModel(name.clone()));
                on_select.call(());
            },
            div { class: "text-sm font-medium text-[var(--text-primary)]", "{model.name()}" }
            div { class: "text-[10px] text-[var(--text-tertiary)]", "{summary}" }
        }
    }
}

/// Active model with its generation params and edit actions
#[component]
fn ModelCard(model: ModelInfo) -> Element {
    let app_state = use_context::<AppState>();
    let mut is_editing = use_signal(|| false);
    let mut is_updating = use_signal(|| false);
    let mut is_resetting = use_signal(|| false);
    let mut edited_this_session = use_signal(|| false);
    let mut draft = use_signal(ModelGenerationParams::default);

    let summary = model.metadata.summary();
    let description = model.metadata.description.clone();
    let shown_params = if is_editing() {
        draft()
    } else {
        model.generation_params.clone()
    };
    let busy = is_updating() || is_resetting();

    let current_params = model.generation_params.clone();
    let handle_edit = move |_| {
        draft.set(current_params.clone());
        is_editing.set(true);
    };

    let app_state_for_save = app_state.clone();
    let name_for_save = model.name().to_string();
    let handle_save = move |_| {
        let api = app_state_for_save.api.clone();
        let mut platform = app_state_for_save.platform;
        let name = name_for_save.clone();
        let params = draft();
        is_updating.set(true);
        spawn(async move {
            match store::update_model(api.as_ref(), &mut platform, &name, params).await {
                Ok(_) => {
                    is_editing.set(false);
                    edited_this_session.set(true);
                }
                Err(e) => {
                    platform.dispatch(PlatformAction::ShowError(format!(
                        "Failed to update model: {}",
                        e
                    )));
                }
            }
            is_updating.set(false);
        });
    };

    let app_state_for_reset = app_state.clone();
    let name_for_reset = model.name().to_string();
    let handle_reset = move |_| {
        let api = app_state_for_reset.api.clone();
        let mut platform = app_state_for_reset.platform;
        let name = name_for_reset.clone();
        is_resetting.set(true);
        spawn(async move {
            match store::reset_model(api.as_ref(), &mut platform, &name).await {
                Ok(_) => edited_this_session.set(false),
                Err(e) => {
                    platform.dispatch(PlatformAction::ShowError(format!(
                        "Failed to reset model: {}",
                        e
                    )));
                }
            }
            is_resetting.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-3 p-3 rounded-lg border border-[var(--accent-primary)] bg-[var(--bg-surface)]",
            div {
                class: "flex items-start justify-between gap-2",
                div {
                    class: "min-w-0",
                    div { class: "text-sm font-semibold text-[var(--text-primary)] truncate", "{model.name()}" }
                    if !summary.is_empty() {
                        div { class: "text-[10px] font-mono text-[var(--text-tertiary)]", "{summary}" }
                    }
                }
                if is_editing() {
                    div {
                        class: "flex gap-2 text-xs",
                        button {
                            onclick: handle_save,
                            disabled: busy,
                            class: "text-[var(--text-success)] hover:underline disabled:opacity-50",
                            if is_updating() { "Saving..." } else { "Save" }
                        }
                        button {
                            onclick: move |_| is_editing.set(false),
                            class: "text-[var(--text-secondary)] hover:underline",
                            "Cancel"
                        }
                    }
                } else {
                    div {
                        class: "flex gap-2 text-xs",
                        button {
                            onclick: handle_edit,
                            disabled: busy,
                            class: "text-[var(--accent-primary)] hover:underline disabled:opacity-50",
                            "Edit"
                        }
                        if edited_this_session() {
                            button {
                                onclick: handle_reset,
                                disabled: busy,
                                class: "text-[var(--warning)] hover:underline disabled:opacity-50",
                                if is_resetting() { "Resetting..." } else { "Reset" }
                            }
                        }
                    }
                }
            }
            if !description.is_empty() {
                p { class: "text-xs text-[var(--text-secondary)]", "{description}" }
            }
            GenerationParamsList {
                params: shown_params,
                is_editing: is_editing(),
                on_change: move |(param, input): (GenerationParam, String)| {
                    param.apply(&mut *draft.write(), &input);
                },
            }
        }
    }
}

#[component]
pub(crate) fn Chevron(open: bool) -> Element {
    let rotation = if open { "rotate-180" } else { "" };
    rsx! {
        svg {
            class: "w-3 h-3 transition-transform {rotation}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}
