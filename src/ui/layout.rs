use crate::app::AppState;
use crate::store::EditorTarget;
use crate::ui::analysis::AnalysisView;
use crate::ui::components::ErrorBanner;
use crate::ui::editor::PromptEditor;
use crate::ui::sidebar::PlatformSelector;
use dioxus::prelude::*;

/// Main layout: sidebar, analysis panel, and the prompt editor dialog
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let editor = app_state.platform.read().editor.clone();

    rsx! {
        div {
            class: "flex h-screen w-screen overflow-hidden bg-[var(--bg-surface)] text-[var(--text-primary)]",
            PlatformSelector {}
            main {
                class: "flex-1 flex flex-col min-w-0",
                ErrorBanner {}
                AnalysisView {}
            }
            if let Some(target) = editor {
                PromptEditor {
                    key: "{editor_key(&target)}",
                    target,
                }
            }
        }
    }
}

/// Remount the editor when it switches to a different prompt
fn editor_key(target: &EditorTarget) -> String {
    match target {
        EditorTarget::Create => "create".to_string(),
        EditorTarget::Edit(prompt) => format!("edit-{}", prompt.name),
    }
}
