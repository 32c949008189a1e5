//! Root Dioxus application component
//!
//! Provides the shared [`AppState`] and loads models and prompts on startup.

use crate::api::PlatformApi;
use crate::store::{self, PlatformState};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Backend connection handed to the app at launch
#[derive(Clone)]
pub struct Backend {
    pub api: Arc<dyn PlatformApi>,
    pub base_url: String,
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PlatformApi>,
    /// Written only through `store::reduce`
    pub platform: Signal<PlatformState>,
    pub api_base_url: String,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        tracing::info!("AppState initialized");
        Self {
            api: backend.api,
            platform: Signal::new(PlatformState::default()),
            api_base_url: backend.base_url,
        }
    }
}

#[component]
pub fn App() -> Element {
    let backend = use_context::<Backend>();
    let app_state = use_context_provider(|| AppState::new(backend));

    {
        let api = app_state.api.clone();
        let platform = app_state.platform;
        use_effect(move || {
            let api = api.clone();
            let mut models_state = platform;
            let mut prompts_state = platform;
            spawn(async move {
                tokio::join!(
                    store::load_models(api.as_ref(), &mut models_state),
                    store::load_prompts(api.as_ref(), &mut prompts_state),
                );
            });
        });
    }

    rsx! {
        Layout {}
    }
}
