//! Analysis types
//!
//! Requests, results, and performance statistics for a text analysis run.

use crate::types::prompt::ApplicationType;
use serde::{Deserialize, Serialize};

/// A request to analyze a block of text
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub text: String,
    pub application_type: ApplicationType,
    pub model_name: Option<String>,
    pub prompt_name: Option<String>,
}

/// One step of an argument's logical structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalFrameworkStep {
    /// Step label; may be a symbol such as `∴`
    pub step_number: String,
    pub statement: String,
}

/// A single argument identified in the analyzed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub argument: String,
    pub supporting_claims: Vec<String>,
    pub qualifiers: Vec<String>,
    pub logical_framework: Vec<LogicalFrameworkStep>,
    pub model_assessment: String,
    /// Model confidence, 0.0 - 1.0
    pub confidence_score: f64,
}

/// Result of the argument analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentAnalysisResult {
    pub arguments: Vec<Argument>,
    pub overall_assessment: String,
    pub credibility_score: f64,
    pub argument_count: u32,
    pub well_supported_arguments_count: u32,
}

impl ArgumentAnalysisResult {
    /// Arguments that were not judged well supported
    pub fn weak_arguments_count(&self) -> u32 {
        self.argument_count
            .saturating_sub(self.well_supported_arguments_count)
    }
}

/// Timing and throughput measurements for one analysis
///
/// Durations are in nanoseconds, except `time_to_first_token` (seconds).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisStatistics {
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

impl AnalysisStatistics {
    /// Prompt plus response tokens
    pub fn total_tokens(&self) -> u64 {
        self.prompt_eval_count + self.eval_count
    }
}

/// Server answer to an analysis request
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub model_used: String,
    pub success: bool,
    pub timestamp: String,
    pub result: Option<ArgumentAnalysisResult>,
    pub raw_model_response: Option<String>,
    pub statistics: Option<AnalysisStatistics>,
}

/// Generic acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
