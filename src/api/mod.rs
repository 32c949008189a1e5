//! Analysis backend access
//!
//! `wire` mirrors the backend JSON, `transform` maps it onto the UI data model,
//! and `client` talks HTTP. Views and the store only see [`PlatformApi`].

pub mod client;
pub mod error;
pub mod transform;
pub mod wire;

use async_trait::async_trait;

pub use client::ApiClient;
pub use error::ApiError;

use crate::types::analysis::{AnalysisRequest, AnalysisResponse, MessageResponse};
use crate::types::model::{ModelGenerationParams, ModelInfo};
use crate::types::prompt::Prompt;

/// Operations the backend exposes to the front end
#[async_trait]
pub trait PlatformApi: Send + Sync {
    async fn get_models(&self) -> Result<Vec<ModelInfo>, ApiError>;
    async fn get_prompts(&self) -> Result<Vec<Prompt>, ApiError>;
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError>;
    async fn update_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError>;
    async fn delete_prompt(&self, name: &str) -> Result<MessageResponse, ApiError>;
    async fn update_model(
        &self,
        name: &str,
        params: ModelGenerationParams,
    ) -> Result<ModelInfo, ApiError>;
    async fn reset_model(&self, name: &str) -> Result<ModelInfo, ApiError>;
    async fn analyze_text(&self, request: AnalysisRequest) -> Result<AnalysisResponse, ApiError>;
}
