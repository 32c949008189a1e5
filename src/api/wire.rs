//! Backend wire types
//!
//! These mirror the JSON the analysis service sends and accepts. Conversion to
//! the UI data model lives in [`crate::api::transform`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelGenerationParams {
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_last_n: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<String>,
}

/// Older backends name the parameter block `hyperparameters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelInfo {
    pub metadata: ApiModelMetadata,
    #[serde(alias = "hyperparameters")]
    pub generation_params: ApiModelGenerationParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelsResponse {
    pub models: Vec<ApiModelInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelResetResponse {
    pub success: bool,
    pub model_info: ApiModelInfo,
}

// ============================================================================
// Prompts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPrompt {
    pub name: String,
    pub title: String,
    pub description: String,
    pub application: String,
    pub input_variables: Vec<String>,
    pub template: String,
    pub version: String,
    pub preferred_models: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPromptsResponse {
    pub prompts: Vec<ApiPrompt>,
}

// ============================================================================
// Analysis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAnalysisRequest {
    pub text: String,
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiLogicalFrameworkStep {
    pub step_number: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiArgument {
    pub argument: String,
    pub supporting_claims: Vec<String>,
    pub qualifiers: Vec<String>,
    pub logical_framework: Vec<ApiLogicalFrameworkStep>,
    pub model_assessment: String,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiArgumentAnalysisResult {
    pub arguments: Vec<ApiArgument>,
    pub overall_assessment: String,
    pub credibility_score: f64,
    pub argument_count: u32,
    pub well_supported_arguments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAnalysisStatistics {
    pub created_at: String,
    pub total_duration: i64,
    pub load_duration: i64,
    pub load_time_ratio: f64,
    pub time_to_first_token: f64,
    pub prompt_eval_count: u64,
    pub prompt_eval_duration: i64,
    pub prompt_tokens_per_second: f64,
    pub prompt_time_ratio: f64,
    pub eval_count: u64,
    pub eval_duration: i64,
    pub tokens_per_second: f64,
    pub generation_time_ratio: f64,
    pub total_throughput_tokens_per_sec: f64,
    pub context_length: u64,
    pub context_window_prompt_fill_rate: f64,
    pub context_window_response_fill_rate: f64,
    pub overhead_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAnalysisResponse {
    pub model_used: String,
    pub success: bool,
    pub timestamp: String,
    #[serde(default)]
    pub result: Option<ApiArgumentAnalysisResult>,
    #[serde(default)]
    pub raw_model_response: Option<String>,
    #[serde(default)]
    pub statistics: Option<ApiAnalysisStatistics>,
}

// ============================================================================
// Generic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessageResponse {
    pub message: String,
}
