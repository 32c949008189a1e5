//! Prompt editor dialog
//!
//! Creates a new prompt or edits the one passed in. Validation errors are
//! listed at the top of the form; the save itself goes through the store.

use crate::app::AppState;
use crate::store::{self, EditorTarget, PlatformAction, PromptForm, StateHandle};
use crate::types::prompt::ApplicationType;
use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-[var(--bg-input)] border border-[var(--border-subtle)] text-sm text-[var(--text-primary)] placeholder-[var(--text-tertiary)] outline-none focus:border-[var(--accent-primary)] disabled:opacity-60";
const LABEL_CLASS: &str = "block text-sm font-medium text-[var(--text-secondary)] mb-1";
const HINT_CLASS: &str = "mt-1 text-[11px] text-[var(--text-tertiary)]";

#[component]
pub fn PromptEditor(target: EditorTarget) -> Element {
    let app_state = use_context::<AppState>();
    let mut platform = app_state.platform;
    let mut form = use_signal(|| PromptForm::new(&target));
    let mut is_saving = use_signal(|| false);

    let is_edit = target.is_edit();
    let (heading, subheading, save_label) = if is_edit {
        ("Edit Prompt", "Edit the details of the prompt.", "Save Changes")
    } else {
        ("Create New Prompt", "Define a new prompt for text analysis.", "Create Prompt")
    };

    let model_names: Vec<String> = platform
        .read()
        .models
        .iter()
        .map(|model| model.name().to_string())
        .collect();

    let current = form.read();
    let draft = current.draft().clone();
    let tag_input = current.tag_input().to_string();
    let variables_input = current.variables_input().to_string();
    let errors = current.validation().messages();
    let can_save = current.can_save() && !is_saving();
    drop(current);

    let mut applications = ApplicationType::known();
    if !applications.contains(&draft.application) {
        applications.push(draft.application.clone());
    }
    let selected_application = draft.application.to_string();

    let api = app_state.api.clone();
    let handle_save = move |_| {
        let Some(prompt) = form.write().submit() else {
            tracing::debug!("Prompt form has validation errors");
            return;
        };
        let api = api.clone();
        is_saving.set(true);
        spawn(async move {
            // On success the store closes the editor
            if store::save_prompt(api.as_ref(), &mut platform, prompt).await.is_err() {
                is_saving.set(false);
            }
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4",

            div {
                class: "w-full max-w-2xl max-h-[90vh] flex flex-col rounded-2xl overflow-hidden bg-[var(--bg-secondary)] border border-[var(--border-subtle)] shadow-2xl",

                div {
                    class: "p-6 border-b border-[var(--border-subtle)]",
                    h2 { class: "text-lg font-semibold text-[var(--text-primary)]", "{heading}" }
                    p { class: "text-sm text-[var(--text-secondary)] mt-1", "{subheading}" }
                }

                div {
                    class: "p-6 flex flex-col gap-5 overflow-y-auto custom-scrollbar",

                    if !errors.is_empty() {
                        div {
                            class: "p-4 rounded-lg bg-[var(--bg-error-subtle)] border border-[var(--border-error-subtle)]",
                            h4 { class: "text-sm font-medium text-[var(--text-error)] mb-2", "Errors:" }
                            ul {
                                class: "list-disc pl-5 flex flex-col gap-1",
                                for message in errors.iter() {
                                    li { key: "{message}", class: "text-xs text-[var(--text-error)]", "{message}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { class: LABEL_CLASS, "Name *" }
                            input {
                                r#type: "text",
                                class: FIELD_CLASS,
                                value: "{draft.name}",
                                placeholder: "e.g., argument_analysis_v1",
                                // The name is the prompt's key on the server
                                disabled: is_edit,
                                oninput: move |e| form.write().set_name(e.value()),
                            }
                            p { class: HINT_CLASS, "Unique identifier for the prompt to be used for querying and as a file name." }
                        }
                        div {
                            label { class: LABEL_CLASS, "Title *" }
                            input {
                                r#type: "text",
                                class: FIELD_CLASS,
                                value: "{draft.title}",
                                placeholder: "e.g., Argument Analysis",
                                oninput: move |e| form.write().set_title(e.value()),
                            }
                            p { class: HINT_CLASS, "Display name for the prompt in the UI." }
                        }
                    }

                    div {
                        label { class: LABEL_CLASS, "Description *" }
                        textarea {
                            class: FIELD_CLASS,
                            rows: "3",
                            value: "{draft.description}",
                            placeholder: "Brief description of what this prompt does...",
                            oninput: move |e| form.write().set_description(e.value()),
                        }
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { class: LABEL_CLASS, "Application" }
                            select {
                                class: FIELD_CLASS,
                                value: "{selected_application}",
                                onchange: move |e| form.write().set_application(ApplicationType::from(e.value())),
                                for application in applications.iter() {
                                    option {
                                        key: "{application}",
                                        value: "{application}",
                                        selected: application.as_str() == selected_application,
                                        "{application.label()}"
                                    }
                                }
                            }
                        }
                        div {
                            label { class: LABEL_CLASS, "Version" }
                            input {
                                r#type: "text",
                                class: FIELD_CLASS,
                                value: "{draft.version}",
                                placeholder: "1.0.0",
                                oninput: move |e| form.write().set_version(e.value()),
                            }
                        }
                    }

                    div {
                        label { class: LABEL_CLASS, "Input Variables" }
                        input {
                            r#type: "text",
                            class: FIELD_CLASS,
                            value: "{variables_input}",
                            placeholder: "e.g., text",
                            oninput: move |e| form.write().set_input_variables(e.value()),
                        }
                        p { class: HINT_CLASS, "Comma separated names the template expects." }
                    }

                    div {
                        label { class: LABEL_CLASS, "Prompt Template *" }
                        textarea {
                            class: "{FIELD_CLASS} font-mono",
                            rows: "8",
                            value: "{draft.template}",
                            placeholder: "Enter your prompt template with input variables and expected JSON output format...",
                            oninput: move |e| form.write().set_template(e.value()),
                        }
                        p { class: HINT_CLASS, "Template should include input variables (e.g., {{text}}) and specify the expected JSON output format." }
                    }

                    div {
                        label { class: LABEL_CLASS, "Preferred Models" }
                        if model_names.is_empty() {
                            p { class: "text-xs text-[var(--text-tertiary)]", "No models available" }
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                            for name in model_names.iter().cloned() {
                                ModelCheckbox {
                                    key: "{name}",
                                    checked: draft.preferred_models.contains(&name),
                                    name,
                                    on_toggle: move |name: String| form.write().toggle_preferred_model(&name),
                                }
                            }
                        }
                    }

                    div {
                        label { class: LABEL_CLASS, "Tags" }
                        if !draft.tags.is_empty() {
                            div {
                                class: "flex flex-wrap gap-2 mb-2",
                                for tag in draft.tags.iter().cloned() {
                                    TagChip {
                                        key: "{tag}",
                                        tag,
                                        on_remove: move |tag: String| form.write().remove_tag(&tag),
                                    }
                                }
                            }
                        }
                        div {
                            class: "flex gap-2",
                            input {
                                r#type: "text",
                                class: FIELD_CLASS,
                                value: "{tag_input}",
                                placeholder: "Add a tag...",
                                oninput: move |e| form.write().set_tag_input(e.value()),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        evt.prevent_default();
                                        form.write().add_tag();
                                    }
                                },
                            }
                            button {
                                onclick: move |_| form.write().add_tag(),
                                class: "px-3 py-2 rounded-lg text-sm text-[var(--text-primary)] bg-[var(--bg-subtle)] hover:bg-[var(--bg-hover)] transition-colors",
                                "Add"
                            }
                        }
                    }
                }

                div {
                    class: "p-4 border-t border-[var(--border-subtle)] flex justify-end gap-3",
                    button {
                        onclick: move |_| platform.dispatch(PlatformAction::StopEditing),
                        disabled: is_saving(),
                        class: "px-4 py-2 rounded-lg text-sm text-[var(--text-secondary)] hover:bg-[var(--bg-hover)] transition-colors disabled:opacity-50",
                        "Cancel"
                    }
                    button {
                        onclick: handle_save,
                        disabled: !can_save,
                        class: "px-6 py-2 rounded-lg text-sm font-medium text-white bg-[var(--accent-primary)] hover:bg-[var(--accent-secondary)] transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        if is_saving() { "Saving..." } else { "{save_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ModelCheckbox(name: String, checked: bool, on_toggle: EventHandler<String>) -> Element {
    let toggled = name.clone();

    rsx! {
        label {
            class: "flex items-center gap-2 p-2 rounded-lg border border-[var(--border-subtle)] hover:bg-[var(--bg-hover)] cursor-pointer",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| on_toggle.call(toggled.clone()),
            }
            span { class: "text-sm text-[var(--text-primary)]", "{name}" }
        }
    }
}

#[component]
fn TagChip(tag: String, on_remove: EventHandler<String>) -> Element {
    let removed = tag.clone();

    rsx! {
        span {
            class: "flex items-center gap-1 px-2 py-1 rounded-full text-xs bg-[var(--accent-primary)]/10 text-[var(--accent-primary)]",
            "{tag}"
            button {
                onclick: move |_| on_remove.call(removed.clone()),
                class: "hover:text-[var(--text-error)]",
                title: "Remove tag",
                "×"
            }
        }
    }
}
