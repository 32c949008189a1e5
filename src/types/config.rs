//! Configuration types
//!
//! Client configuration for reaching the analysis backend.

use serde::{Deserialize, Serialize};

/// Default backend location
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint is resolved against
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Normalize user-provided values
    pub fn validate(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            default_api_base_url()
        } else {
            trimmed.to_string()
        };
        if self.request_timeout_secs == Some(0) {
            self.request_timeout_secs = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"request_timeout_secs": 30}"#)
            .expect("Failed to deserialize");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_validate_normalizes() {
        let mut config = ClientConfig {
            api_base_url: " http://tap.local:9000/api/v1/ ".to_string(),
            request_timeout_secs: Some(0),
        };
        config.validate();
        assert_eq!(config.api_base_url, "http://tap.local:9000/api/v1");
        assert!(config.request_timeout_secs.is_none());

        config.api_base_url = "   ".to_string();
        config.validate();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
