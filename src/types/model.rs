//! Model types
//!
//! Model metadata and generation parameters as the UI sees them.

use serde::{Deserialize, Serialize};

/// Sampling and runtime configuration for a model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelGenerationParams {
    /// Sampling temperature
    pub temperature: f64,
    /// Top-p (nucleus) sampling
    pub top_p: Option<f64>,
    /// Top-k sampling
    pub top_k: Option<u32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Number of tokens considered for repetition
    pub repeat_last_n: Option<i32>,
    /// Repetition penalty
    pub repeat_penalty: Option<f64>,
    /// Context window length
    pub context_length: Option<u32>,
    /// Random seed
    pub seed: Option<i64>,
    /// Number of GPUs to use (-1 = dynamic, 0 = CPU only)
    pub gpu_count: Option<i32>,
}

/// Descriptive metadata for a model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Unique model name
    pub name: String,
    pub description: String,
    pub version: String,
    /// Model size in bytes
    pub size: Option<u64>,
    /// Parameter count label (e.g. "7B")
    pub parameter_count: Option<String>,
    pub architecture: Option<String>,
    pub quantization: Option<String>,
}

impl ModelMetadata {
    /// Size in gigabytes, two decimals
    pub fn size_string(&self) -> Option<String> {
        self.size
            .map(|bytes| format!("{:.2} GB", bytes as f64 / 1024.0 / 1024.0 / 1024.0))
    }

    /// Short "architecture • size • quantization" summary for cards
    pub fn summary(&self) -> String {
        let mut items = Vec::new();
        if let Some(architecture) = &self.architecture {
            items.push(architecture.clone());
        }
        if let Some(size) = self.size_string() {
            items.push(size);
        }
        if let Some(quantization) = &self.quantization {
            items.push(quantization.clone());
        }
        items.join(" • ")
    }
}

/// A model and its current generation parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    pub metadata: ModelMetadata,
    pub generation_params: ModelGenerationParams,
}

impl ModelInfo {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_skips_missing_fields() {
        let metadata = ModelMetadata {
            name: "llama3".to_string(),
            architecture: Some("llama".to_string()),
            size: Some(4 * 1024 * 1024 * 1024),
            ..Default::default()
        };
        assert_eq!(metadata.summary(), "llama • 4.00 GB");
    }

    #[test]
    fn test_summary_empty() {
        let metadata = ModelMetadata::default();
        assert_eq!(metadata.summary(), "");
        assert!(metadata.size_string().is_none());
    }
}
