//! Wire <-> UI model conversions
//!
//! Mechanical field mapping only. Optional fields pass through untouched and
//! nothing is validated here; malformed payloads never get this far because
//! serde rejects them in the client.

use crate::api::wire::*;
use crate::types::analysis::{
    AnalysisRequest, AnalysisResponse, AnalysisStatistics, Argument, ArgumentAnalysisResult,
    LogicalFrameworkStep, MessageResponse,
};
use crate::types::model::{ModelGenerationParams, ModelInfo, ModelMetadata};
use crate::types::prompt::Prompt;

// Models

impl From<ApiModelGenerationParams> for ModelGenerationParams {
    fn from(params: ApiModelGenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_tokens: params.max_tokens,
            repeat_last_n: params.repeat_last_n,
            repeat_penalty: params.repeat_penalty,
            context_length: params.context_length,
            seed: params.seed,
            gpu_count: params.gpu_count,
        }
    }
}

impl From<ModelGenerationParams> for ApiModelGenerationParams {
    fn from(params: ModelGenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_tokens: params.max_tokens,
            repeat_last_n: params.repeat_last_n,
            repeat_penalty: params.repeat_penalty,
            context_length: params.context_length,
            seed: params.seed,
            gpu_count: params.gpu_count,
        }
    }
}

impl From<ApiModelMetadata> for ModelMetadata {
    fn from(metadata: ApiModelMetadata) -> Self {
        Self {
            name: metadata.name,
            description: metadata.description,
            version: metadata.version,
            size: metadata.size,
            parameter_count: metadata.parameter_count,
            architecture: metadata.architecture,
            quantization: metadata.quantization,
        }
    }
}

impl From<ModelMetadata> for ApiModelMetadata {
    fn from(metadata: ModelMetadata) -> Self {
        Self {
            name: metadata.name,
            description: metadata.description,
            version: metadata.version,
            size: metadata.size,
            parameter_count: metadata.parameter_count,
            architecture: metadata.architecture,
            quantization: metadata.quantization,
        }
    }
}

impl From<ApiModelInfo> for ModelInfo {
    fn from(info: ApiModelInfo) -> Self {
        Self {
            metadata: info.metadata.into(),
            generation_params: info.generation_params.into(),
        }
    }
}

impl From<ModelInfo> for ApiModelInfo {
    fn from(info: ModelInfo) -> Self {
        Self {
            metadata: info.metadata.into(),
            generation_params: info.generation_params.into(),
        }
    }
}

// Prompts

impl From<ApiPrompt> for Prompt {
    fn from(prompt: ApiPrompt) -> Self {
        Self {
            name: prompt.name,
            title: prompt.title,
            description: prompt.description,
            application: prompt.application.into(),
            input_variables: prompt.input_variables,
            template: prompt.template,
            version: prompt.version,
            preferred_models: prompt.preferred_models,
            tags: prompt.tags,
        }
    }
}

impl From<Prompt> for ApiPrompt {
    fn from(prompt: Prompt) -> Self {
        Self {
            name: prompt.name,
            title: prompt.title,
            description: prompt.description,
            application: prompt.application.into(),
            input_variables: prompt.input_variables,
            template: prompt.template,
            version: prompt.version,
            preferred_models: prompt.preferred_models,
            tags: prompt.tags,
        }
    }
}

// Analysis

impl From<AnalysisRequest> for ApiAnalysisRequest {
    fn from(request: AnalysisRequest) -> Self {
        Self {
            text: request.text,
            application: request.application_type.into(),
            model_name: request.model_name,
            prompt_name: request.prompt_name,
        }
    }
}

impl From<ApiLogicalFrameworkStep> for LogicalFrameworkStep {
    fn from(step: ApiLogicalFrameworkStep) -> Self {
        Self {
            step_number: step.step_number,
            statement: step.statement,
        }
    }
}

impl From<ApiArgument> for Argument {
    fn from(arg: ApiArgument) -> Self {
        Self {
            argument: arg.argument,
            supporting_claims: arg.supporting_claims,
            qualifiers: arg.qualifiers,
            logical_framework: arg.logical_framework.into_iter().map(Into::into).collect(),
            model_assessment: arg.model_assessment,
            confidence_score: arg.confidence_score,
        }
    }
}

impl From<ApiArgumentAnalysisResult> for ArgumentAnalysisResult {
    fn from(result: ApiArgumentAnalysisResult) -> Self {
        Self {
            arguments: result.arguments.into_iter().map(Into::into).collect(),
            overall_assessment: result.overall_assessment,
            credibility_score: result.credibility_score,
            argument_count: result.argument_count,
            well_supported_arguments_count: result.well_supported_arguments,
        }
    }
}

impl From<ApiAnalysisStatistics> for AnalysisStatistics {
    fn from(stats: ApiAnalysisStatistics) -> Self {
        Self {
            created_at: stats.created_at,
            total_duration: stats.total_duration,
            load_duration: stats.load_duration,
            load_time_ratio: stats.load_time_ratio,
            time_to_first_token: stats.time_to_first_token,
            prompt_eval_count: stats.prompt_eval_count,
            prompt_eval_duration: stats.prompt_eval_duration,
            prompt_tokens_per_second: stats.prompt_tokens_per_second,
            prompt_time_ratio: stats.prompt_time_ratio,
            eval_count: stats.eval_count,
            eval_duration: stats.eval_duration,
            tokens_per_second: stats.tokens_per_second,
            generation_time_ratio: stats.generation_time_ratio,
            total_throughput_tokens_per_sec: stats.total_throughput_tokens_per_sec,
            context_length: stats.context_length,
            context_window_prompt_fill_rate: stats.context_window_prompt_fill_rate,
            context_window_response_fill_rate: stats.context_window_response_fill_rate,
            overhead_time: stats.overhead_time,
        }
    }
}

impl From<ApiAnalysisResponse> for AnalysisResponse {
    fn from(response: ApiAnalysisResponse) -> Self {
        Self {
            model_used: response.model_used,
            success: response.success,
            timestamp: response.timestamp,
            result: response.result.map(Into::into),
            raw_model_response: response.raw_model_response,
            statistics: response.statistics.map(Into::into),
        }
    }
}

impl From<ApiMessageResponse> for MessageResponse {
    fn from(response: ApiMessageResponse) -> Self {
        Self {
            message: response.message,
        }
    }
}
