//! Platform state and its transition function

use crate::types::analysis::AnalysisResponse;
use crate::types::model::ModelInfo;
use crate::types::prompt::{ApplicationType, Prompt};

/// Progress of a list fetch
#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Progress of the current analysis session
#[derive(Clone, PartialEq, Debug, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Failed(String),
}

/// What the prompt editor is working on
#[derive(Clone, PartialEq, Debug)]
pub enum EditorTarget {
    Create,
    Edit(Prompt),
}

impl EditorTarget {
    pub fn is_edit(&self) -> bool {
        matches!(self, EditorTarget::Edit(_))
    }
}

/// Everything the views render from
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PlatformState {
    pub models: Vec<ModelInfo>,
    pub prompts: Vec<Prompt>,
    pub active_model_name: String,
    pub active_prompt_name: String,
    pub active_application: ApplicationType,
    pub models_status: LoadStatus,
    pub prompts_status: LoadStatus,
    pub analysis_status: AnalysisStatus,
    pub last_response: Option<AnalysisResponse>,
    pub editor: Option<EditorTarget>,
    /// Dismissible banner message
    pub error: Option<String>,
}

impl PlatformState {
    pub fn active_model(&self) -> Option<&ModelInfo> {
        self.models
            .iter()
            .find(|model| model.name() == self.active_model_name)
    }

    pub fn active_prompt(&self) -> Option<&Prompt> {
        self.prompts
            .iter()
            .find(|prompt| prompt.name == self.active_prompt_name)
    }

    /// Prompts that belong to the selected application
    pub fn prompts_for_active_application(&self) -> Vec<&Prompt> {
        self.prompts
            .iter()
            .filter(|prompt| prompt.application == self.active_application)
            .collect()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis_status == AnalysisStatus::Running
    }
}

/// State transitions
#[derive(Clone, PartialEq, Debug)]
pub enum PlatformAction {
    ModelsLoading,
    ModelsLoaded(Vec<ModelInfo>),
    ModelsFailed(String),
    PromptsLoading,
    PromptsLoaded(Vec<Prompt>),
    PromptsFailed(String),
    ModelUpdated(ModelInfo),
    SetActiveModel(String),
    SetActivePrompt(String),
    SetActiveApplication(ApplicationType),
    StartEditing(Option<Prompt>),
    StopEditing,
    AnalysisStarted,
    AnalysisCompleted(AnalysisResponse),
    AnalysisFailed(String),
    ShowError(String),
    DismissError,
}

/// Apply one action to the state
pub fn reduce(state: &mut PlatformState, action: PlatformAction) {
    match action {
        PlatformAction::ModelsLoading => state.models_status = LoadStatus::Loading,
        PlatformAction::ModelsLoaded(models) => {
            if state.active_model_name.is_empty() {
                if let Some(first) = models.first() {
                    state.active_model_name = first.name().to_string();
                }
            }
            state.models = models;
            state.models_status = LoadStatus::Ready;
        }
        PlatformAction::ModelsFailed(message) => {
            state.models_status = LoadStatus::Failed(message);
        }
        PlatformAction::PromptsLoading => state.prompts_status = LoadStatus::Loading,
        PlatformAction::PromptsLoaded(prompts) => {
            if state.active_prompt_name.is_empty() {
                if let Some(first) = prompts.first() {
                    state.active_prompt_name = first.name.clone();
                }
            }
            state.prompts = prompts;
            state.prompts_status = LoadStatus::Ready;
        }
        PlatformAction::PromptsFailed(message) => {
            state.prompts_status = LoadStatus::Failed(message);
        }
        PlatformAction::ModelUpdated(info) => {
            if let Some(slot) = state
                .models
                .iter_mut()
                .find(|model| model.name() == info.name())
            {
                *slot = info;
            }
        }
        PlatformAction::SetActiveModel(name) => state.active_model_name = name,
        PlatformAction::SetActivePrompt(name) => state.active_prompt_name = name,
        PlatformAction::SetActiveApplication(application) => {
            state.active_application = application;
        }
        PlatformAction::StartEditing(prompt) => {
            state.editor = Some(match prompt {
                Some(prompt) => EditorTarget::Edit(prompt),
                None => EditorTarget::Create,
            });
        }
        PlatformAction::StopEditing => state.editor = None,
        PlatformAction::AnalysisStarted => {
            state.analysis_status = AnalysisStatus::Running;
            state.last_response = None;
        }
        PlatformAction::AnalysisCompleted(response) => {
            state.analysis_status = AnalysisStatus::Completed;
            state.last_response = Some(response);
        }
        PlatformAction::AnalysisFailed(message) => {
            state.analysis_status = AnalysisStatus::Failed(message);
        }
        PlatformAction::ShowError(message) => state.error = Some(message),
        PlatformAction::DismissError => state.error = None,
    }
}
