//! Application state store
//!
//! [`PlatformState`] is changed only through [`reduce`]. The async operations
//! here call the backend through [`PlatformApi`] and dispatch the outcome to a
//! [`StateHandle`], which is the app's `Signal` at runtime and a plain
//! `PlatformState` in tests.

pub mod editor;
pub mod state;

pub use editor::PromptForm;
pub use state::{
    reduce, AnalysisStatus, EditorTarget, LoadStatus, PlatformAction, PlatformState,
};

use dioxus::prelude::{Readable, Signal, Writable};
use thiserror::Error;

use crate::api::{ApiError, PlatformApi};
use crate::types::analysis::{AnalysisRequest, AnalysisResponse, MessageResponse};
use crate::types::model::{ModelGenerationParams, ModelInfo};
use crate::types::prompt::Prompt;

/// Somewhere platform actions can be applied
pub trait StateHandle {
    fn dispatch(&mut self, action: PlatformAction);
    fn with_state<R>(&self, f: impl FnOnce(&PlatformState) -> R) -> R;
}

impl StateHandle for PlatformState {
    fn dispatch(&mut self, action: PlatformAction) {
        reduce(self, action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&PlatformState) -> R) -> R {
        f(self)
    }
}

impl StateHandle for Signal<PlatformState> {
    fn dispatch(&mut self, action: PlatformAction) {
        reduce(&mut *self.write(), action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&PlatformState) -> R) -> R {
        f(&*self.read())
    }
}

/// Reasons an analysis could not be run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    #[error("Please enter some text to analyze")]
    EmptyText,
    #[error("Please select a model first")]
    NoModel,
    #[error("Please select a prompt first")]
    NoPrompt,
    #[error("An analysis is already running")]
    Busy,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetch the model list
pub async fn load_models<S: StateHandle>(api: &dyn PlatformApi, state: &mut S) {
    state.dispatch(PlatformAction::ModelsLoading);
    match api.get_models().await {
        Ok(models) => {
            tracing::info!("Loaded {} models", models.len());
            state.dispatch(PlatformAction::ModelsLoaded(models));
        }
        Err(e) => {
            tracing::error!("Error loading models: {}", e);
            state.dispatch(PlatformAction::ModelsFailed(e.to_string()));
        }
    }
}

/// Fetch the prompt list
pub async fn load_prompts<S: StateHandle>(api: &dyn PlatformApi, state: &mut S) {
    state.dispatch(PlatformAction::PromptsLoading);
    match api.get_prompts().await {
        Ok(prompts) => {
            tracing::info!("Loaded {} prompts", prompts.len());
            state.dispatch(PlatformAction::PromptsLoaded(prompts));
        }
        Err(e) => {
            tracing::error!("Error loading prompts: {}", e);
            state.dispatch(PlatformAction::PromptsFailed(e.to_string()));
        }
    }
}

pub async fn refresh_prompts<S: StateHandle>(api: &dyn PlatformApi, state: &mut S) {
    load_prompts(api, state).await;
}

/// Push new generation params and store the server's copy of the model
pub async fn update_model<S: StateHandle>(
    api: &dyn PlatformApi,
    state: &mut S,
    name: &str,
    params: ModelGenerationParams,
) -> Result<ModelInfo, ApiError> {
    let info = api.update_model(name, params).await.map_err(|e| {
        tracing::error!("Error updating model {}: {}", name, e);
        e
    })?;
    state.dispatch(PlatformAction::ModelUpdated(info.clone()));
    Ok(info)
}

/// Restore a model's default generation params
pub async fn reset_model<S: StateHandle>(
    api: &dyn PlatformApi,
    state: &mut S,
    name: &str,
) -> Result<ModelInfo, ApiError> {
    let info = api.reset_model(name).await.map_err(|e| {
        tracing::error!("Error resetting model {}: {}", name, e);
        e
    })?;
    state.dispatch(PlatformAction::ModelUpdated(info.clone()));
    Ok(info)
}

/// Create or update the prompt open in the editor, then select it
pub async fn save_prompt<S: StateHandle>(
    api: &dyn PlatformApi,
    state: &mut S,
    prompt: Prompt,
) -> Result<Prompt, ApiError> {
    let editing = state.with_state(|s| s.editor.as_ref().is_some_and(EditorTarget::is_edit));
    let result = if editing {
        api.update_prompt(prompt).await
    } else {
        api.create_prompt(prompt).await
    };

    let saved = match result {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!("Error saving prompt: {}", e);
            state.dispatch(PlatformAction::ShowError(e.to_string()));
            return Err(e);
        }
    };

    tracing::info!("Saved prompt {}", saved.name);
    refresh_prompts(api, state).await;
    state.dispatch(PlatformAction::SetActivePrompt(saved.name.clone()));
    state.dispatch(PlatformAction::StopEditing);
    Ok(saved)
}

/// Delete a prompt and reload the list
pub async fn delete_prompt<S: StateHandle>(
    api: &dyn PlatformApi,
    state: &mut S,
    name: &str,
) -> Result<MessageResponse, ApiError> {
    let response = match api.delete_prompt(name).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error deleting prompt {}: {}", name, e);
            state.dispatch(PlatformAction::ShowError(e.to_string()));
            return Err(e);
        }
    };

    if state.with_state(|s| s.active_prompt_name == name) {
        state.dispatch(PlatformAction::SetActivePrompt(String::new()));
    }
    refresh_prompts(api, state).await;
    Ok(response)
}

/// Run the active prompt and model over `text`
pub async fn analyze<S: StateHandle>(
    api: &dyn PlatformApi,
    state: &mut S,
    text: &str,
) -> Result<AnalysisResponse, AnalyzeError> {
    let request = match build_request(state, text) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Analysis not started: {}", e);
            state.dispatch(PlatformAction::ShowError(e.to_string()));
            return Err(e);
        }
    };

    tracing::info!(
        "Analyzing {} chars with model {:?} and prompt {:?}",
        request.text.chars().count(),
        request.model_name,
        request.prompt_name
    );
    state.dispatch(PlatformAction::AnalysisStarted);

    match api.analyze_text(request).await {
        Ok(response) => {
            state.dispatch(PlatformAction::AnalysisCompleted(response.clone()));
            Ok(response)
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            state.dispatch(PlatformAction::AnalysisFailed(e.to_string()));
            state.dispatch(PlatformAction::ShowError(e.to_string()));
            Err(e.into())
        }
    }
}

fn build_request<S: StateHandle>(state: &S, text: &str) -> Result<AnalysisRequest, AnalyzeError> {
    let text = text.trim();
    state.with_state(|s| {
        if s.is_analyzing() {
            return Err(AnalyzeError::Busy);
        }
        if text.is_empty() {
            return Err(AnalyzeError::EmptyText);
        }
        if s.active_model_name.is_empty() {
            return Err(AnalyzeError::NoModel);
        }
        if s.active_prompt_name.is_empty() {
            return Err(AnalyzeError::NoPrompt);
        }

        Ok(AnalysisRequest {
            text: text.to_string(),
            application_type: s.active_application.clone(),
            model_name: Some(s.active_model_name.clone()),
            prompt_name: Some(s.active_prompt_name.clone()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::ModelMetadata;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory backend that records calls
    #[derive(Default)]
    struct FakeApi {
        models: Vec<ModelInfo>,
        prompts: Mutex<Vec<Prompt>>,
        fail_with: Option<ApiError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn record(&self, call: &str) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call.to_string());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlatformApi for FakeApi {
        async fn get_models(&self) -> Result<Vec<ModelInfo>, ApiError> {
            self.record("get_models")?;
            Ok(self.models.clone())
        }

        async fn get_prompts(&self) -> Result<Vec<Prompt>, ApiError> {
            self.record("get_prompts")?;
            Ok(self.prompts.lock().unwrap().clone())
        }

        async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError> {
            self.record("create_prompt")?;
            self.prompts.lock().unwrap().push(prompt.clone());
            Ok(prompt)
        }

        async fn update_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError> {
            self.record("update_prompt")?;
            let mut prompts = self.prompts.lock().unwrap();
            if let Some(slot) = prompts.iter_mut().find(|p| p.name == prompt.name) {
                *slot = prompt.clone();
            }
            Ok(prompt)
        }

        async fn delete_prompt(&self, name: &str) -> Result<MessageResponse, ApiError> {
            self.record("delete_prompt")?;
            self.prompts.lock().unwrap().retain(|p| p.name != name);
            Ok(MessageResponse {
                message: format!("Prompt '{}' deleted", name),
            })
        }

        async fn update_model(
            &self,
            name: &str,
            params: ModelGenerationParams,
        ) -> Result<ModelInfo, ApiError> {
            self.record("update_model")?;
            Ok(model(name, params.temperature))
        }

        async fn reset_model(&self, name: &str) -> Result<ModelInfo, ApiError> {
            self.record("reset_model")?;
            Ok(model(name, 0.7))
        }

        async fn analyze_text(
            &self,
            request: AnalysisRequest,
        ) -> Result<AnalysisResponse, ApiError> {
            self.record(&format!("analyze_text:{}", request.text))?;
            Ok(AnalysisResponse {
                model_used: request.model_name.unwrap_or_default(),
                success: true,
                timestamp: "2025-01-01T00:00:00".to_string(),
                result: None,
                raw_model_response: Some("{}".to_string()),
                statistics: None,
            })
        }
    }

    fn model(name: &str, temperature: f64) -> ModelInfo {
        ModelInfo {
            metadata: ModelMetadata {
                name: name.to_string(),
                ..Default::default()
            },
            generation_params: ModelGenerationParams {
                temperature,
                ..Default::default()
            },
        }
    }

    fn prompt(name: &str) -> Prompt {
        Prompt {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn ready_state() -> PlatformState {
        PlatformState {
            active_model_name: "llama3".to_string(),
            active_prompt_name: "args".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_models_selects_first() {
        let api = FakeApi {
            models: vec![model("a", 0.1), model("b", 0.2)],
            ..Default::default()
        };
        let mut state = PlatformState::default();

        load_models(&api, &mut state).await;

        assert_eq!(state.models.len(), 2);
        assert_eq!(state.active_model_name, "a");
        assert_eq!(state.models_status, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn test_failed_prompt_load_keeps_list() {
        let api = FakeApi {
            fail_with: Some(ApiError::Network("connection refused".to_string())),
            ..Default::default()
        };
        let mut state = PlatformState {
            prompts: vec![prompt("old")],
            ..Default::default()
        };

        load_prompts(&api, &mut state).await;

        assert_eq!(state.prompts, vec![prompt("old")]);
        assert_eq!(
            state.prompts_status.error(),
            Some("Network error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_update_and_reset_model() {
        let api = FakeApi::default();
        let mut state = PlatformState {
            models: vec![model("a", 0.1), model("b", 0.2)],
            ..Default::default()
        };

        let params = ModelGenerationParams {
            temperature: 1.2,
            ..Default::default()
        };
        let info = update_model(&api, &mut state, "b", params).await.unwrap();
        assert_eq!(info.generation_params.temperature, 1.2);
        assert_eq!(state.models[1].generation_params.temperature, 1.2);
        assert_eq!(state.models[0].generation_params.temperature, 0.1);

        reset_model(&api, &mut state, "b").await.unwrap();
        assert_eq!(state.models[1].generation_params.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_update_model_error_leaves_state() {
        let api = FakeApi {
            fail_with: Some(ApiError::from_status(404, r#"{"detail":"Model not found"}"#)),
            ..Default::default()
        };
        let mut state = PlatformState {
            models: vec![model("a", 0.1)],
            ..Default::default()
        };

        let err = update_model(&api, &mut state, "a", ModelGenerationParams::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(state.models, vec![model("a", 0.1)]);
    }

    #[tokio::test]
    async fn test_save_new_prompt_selects_it_and_closes_editor() {
        let api = FakeApi {
            prompts: Mutex::new(vec![prompt("existing")]),
            ..Default::default()
        };
        let mut state = PlatformState::default();
        state.dispatch(PlatformAction::StartEditing(None));

        save_prompt(&api, &mut state, prompt("fresh")).await.unwrap();

        assert_eq!(api.calls(), vec!["create_prompt", "get_prompts"]);
        assert_eq!(state.prompts.len(), 2);
        assert_eq!(state.active_prompt_name, "fresh");
        assert!(state.editor.is_none());
    }

    #[tokio::test]
    async fn test_save_edited_prompt_updates() {
        let api = FakeApi {
            prompts: Mutex::new(vec![prompt("existing")]),
            ..Default::default()
        };
        let mut state = PlatformState::default();
        state.dispatch(PlatformAction::StartEditing(Some(prompt("existing"))));

        let edited = Prompt {
            title: "Edited".to_string(),
            ..prompt("existing")
        };
        save_prompt(&api, &mut state, edited).await.unwrap();

        assert_eq!(api.calls(), vec!["update_prompt", "get_prompts"]);
        assert_eq!(state.prompts[0].title, "Edited");
    }

    #[tokio::test]
    async fn test_save_failure_keeps_editor_open() {
        let api = FakeApi {
            fail_with: Some(ApiError::from_status(409, r#"{"detail":"Prompt exists"}"#)),
            ..Default::default()
        };
        let mut state = PlatformState::default();
        state.dispatch(PlatformAction::StartEditing(None));

        assert!(save_prompt(&api, &mut state, prompt("dup")).await.is_err());
        assert_eq!(state.editor, Some(EditorTarget::Create));
        assert_eq!(state.error.as_deref(), Some("Prompt exists"));
    }

    #[tokio::test]
    async fn test_delete_active_prompt_falls_back_to_first() {
        let api = FakeApi {
            prompts: Mutex::new(vec![prompt("one"), prompt("two")]),
            ..Default::default()
        };
        let mut state = PlatformState::default();
        load_prompts(&api, &mut state).await;
        state.dispatch(PlatformAction::SetActivePrompt("two".to_string()));

        let response = delete_prompt(&api, &mut state, "two").await.unwrap();

        assert_eq!(response.message, "Prompt 'two' deleted");
        assert_eq!(state.prompts, vec![prompt("one")]);
        assert_eq!(state.active_prompt_name, "one");
    }

    #[tokio::test]
    async fn test_analyze_preconditions_skip_api() {
        let api = FakeApi::default();

        let mut state = ready_state();
        let err = analyze(&api, &mut state, "   ").await.unwrap_err();
        assert_eq!(err, AnalyzeError::EmptyText);
        assert_eq!(state.error.as_deref(), Some("Please enter some text to analyze"));

        let mut state = PlatformState {
            active_model_name: String::new(),
            ..ready_state()
        };
        let err = analyze(&api, &mut state, "text").await.unwrap_err();
        assert_eq!(err, AnalyzeError::NoModel);

        let mut state = PlatformState {
            active_prompt_name: String::new(),
            ..ready_state()
        };
        let err = analyze(&api, &mut state, "text").await.unwrap_err();
        assert_eq!(err, AnalyzeError::NoPrompt);

        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_rejects_while_running() {
        let api = FakeApi::default();
        let mut state = ready_state();
        state.dispatch(PlatformAction::AnalysisStarted);

        let err = analyze(&api, &mut state, "text").await.unwrap_err();

        assert_eq!(err, AnalyzeError::Busy);
        assert!(api.calls().is_empty());
        assert!(state.is_analyzing());
    }

    #[tokio::test]
    async fn test_analyze_sends_trimmed_text() {
        let api = FakeApi::default();
        let mut state = ready_state();

        let response = analyze(&api, &mut state, "  Cats purr.  ").await.unwrap();

        assert_eq!(api.calls(), vec!["analyze_text:Cats purr."]);
        assert_eq!(response.model_used, "llama3");
        assert_eq!(state.analysis_status, AnalysisStatus::Completed);
        assert_eq!(state.last_response, Some(response));
    }

    #[tokio::test]
    async fn test_analyze_failure_raises_banner() {
        let api = FakeApi {
            fail_with: Some(ApiError::from_status(500, r#"{"detail":"Analysis failed"}"#)),
            ..Default::default()
        };
        let mut state = ready_state();

        let err = analyze(&api, &mut state, "text").await.unwrap_err();

        assert_eq!(err.to_string(), "Analysis failed");
        assert_eq!(
            state.analysis_status,
            AnalysisStatus::Failed("Analysis failed".to_string())
        );
        assert_eq!(state.error.as_deref(), Some("Analysis failed"));
    }
}
