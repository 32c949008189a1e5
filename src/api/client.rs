//! HTTP client for the analysis backend
//!
//! One request per call: no retries, no caching. Error bodies are unwrapped
//! into [`ApiError`] and success bodies are routed through the wire types.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::wire::{
    ApiAnalysisRequest, ApiAnalysisResponse, ApiMessageResponse, ApiModelGenerationParams,
    ApiModelInfo, ApiModelResetResponse, ApiModelsResponse, ApiPrompt, ApiPromptsResponse,
};
use crate::api::PlatformApi;
use crate::types::analysis::{AnalysisRequest, AnalysisResponse, MessageResponse};
use crate::types::config::ClientConfig;
use crate::types::model::{ModelGenerationParams, ModelInfo};
use crate::types::prompt::Prompt;

/// A decoded success body
#[derive(Debug)]
enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ResponseBody::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            // Some proxies drop the content type; try the text as JSON anyway
            ResponseBody::Text(text) => serde_json::from_str(&text).map_err(|e| {
                ApiError::Decode(format!("expected JSON ({}), got: {}", e, preview(&text)))
            }),
        }
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 120;
    match text.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// REST client for the TAP backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ApiError::InvalidRequest(format!(
                "Invalid API base URL '{}': {}",
                config.api_base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "Invalid API base URL '{}'",
                config.api_base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to create HTTP client: {}", e))
        })?;

        tracing::info!("API client targeting {}", base_url);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<ResponseBody, ApiError> {
        let request = request.build().map_err(ApiError::from)?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("{} {}", method, url);

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if !status.is_success() {
            // An unreadable error body still reports the status
            let text = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(status.as_u16(), &text);
            tracing::warn!("{} {} returned {}: {}", method, url, status, error);
            return Err(error);
        }

        let text = response.text().await?;
        if is_json {
            serde_json::from_str(&text)
                .map(ResponseBody::Json)
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }
}

#[async_trait]
impl PlatformApi for ApiClient {
    async fn get_models(&self) -> Result<Vec<ModelInfo>, ApiError> {
        let response: ApiModelsResponse = self
            .send(self.http.get(self.endpoint(&["models"])))
            .await?
            .decode()?;
        Ok(response.models.into_iter().map(ModelInfo::from).collect())
    }

    async fn get_prompts(&self) -> Result<Vec<Prompt>, ApiError> {
        let response: ApiPromptsResponse = self
            .send(self.http.get(self.endpoint(&["prompts"])))
            .await?
            .decode()?;
        Ok(response.prompts.into_iter().map(Prompt::from).collect())
    }

    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError> {
        let body = ApiPrompt::from(prompt);
        let created: ApiPrompt = self
            .send(self.http.post(self.endpoint(&["prompts"])).json(&body))
            .await?
            .decode()?;
        Ok(created.into())
    }

    async fn update_prompt(&self, prompt: Prompt) -> Result<Prompt, ApiError> {
        if prompt.name.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Prompt name is required for update".to_string(),
            ));
        }

        let url = self.endpoint(&["prompts", &prompt.name]);
        let body = ApiPrompt::from(prompt);
        let updated: ApiPrompt = self.send(self.http.put(url).json(&body)).await?.decode()?;
        Ok(updated.into())
    }

    async fn delete_prompt(&self, name: &str) -> Result<MessageResponse, ApiError> {
        let body = self
            .send(self.http.delete(self.endpoint(&["prompts", name])))
            .await?;

        // The backend answers a bare `true`; only an object carries a message
        let message = match body {
            ResponseBody::Json(value) if value.get("message").is_some() => {
                serde_json::from_value::<ApiMessageResponse>(value)
                    .map(MessageResponse::from)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
            }
            _ => MessageResponse {
                message: format!("Prompt '{}' deleted", name),
            },
        };
        Ok(message)
    }

    async fn update_model(
        &self,
        name: &str,
        params: ModelGenerationParams,
    ) -> Result<ModelInfo, ApiError> {
        let body = ApiModelGenerationParams::from(params);
        let updated: ApiModelInfo = self
            .send(self.http.put(self.endpoint(&["models", name])).json(&body))
            .await?
            .decode()?;
        Ok(updated.into())
    }

    async fn reset_model(&self, name: &str) -> Result<ModelInfo, ApiError> {
        let response: ApiModelResetResponse = self
            .send(self.http.post(self.endpoint(&["models", name, "reset"])))
            .await?
            .decode()?;
        if !response.success {
            tracing::warn!("Backend reported an unsuccessful reset for {}", name);
        }
        Ok(response.model_info.into())
    }

    async fn analyze_text(&self, request: AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        let body = ApiAnalysisRequest::from(request);
        let response: ApiAnalysisResponse = self
            .send(self.http.post(self.endpoint(&["analyze"])).json(&body))
            .await?
            .decode()?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::prompt::ApplicationType;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig {
            api_base_url: format!("{}/api/v1", server.uri()),
            request_timeout_secs: None,
        };
        ApiClient::new(&config).expect("client")
    }

    fn prompt_json(name: &str) -> Value {
        json!({
            "name": name,
            "title": "Argument Analysis",
            "description": "Finds arguments",
            "application": "argument_analysis",
            "input_variables": ["text"],
            "template": "{\"arguments\": []}",
            "version": "1.0.0",
            "preferred_models": [],
            "tags": []
        })
    }

    #[tokio::test]
    async fn test_get_models_sends_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/models"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [
                    {
                        "metadata": {"name": "llama3", "description": "Llama", "version": "8b"},
                        "generation_params": {"temperature": 0.8, "top_p": 0.9}
                    },
                    {
                        "metadata": {"name": "mistral", "description": "Mistral", "version": "7b"},
                        "hyperparameters": {"temperature": 0.5}
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let models = client_for(&server).get_models().await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name(), "llama3");
        assert_eq!(models[0].generation_params.top_p, Some(0.9));
        assert_eq!(models[1].generation_params.temperature, 0.5);
    }

    #[tokio::test]
    async fn test_not_found_detail_becomes_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/prompts/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
            .mount(&server)
            .await;

        let prompt: Prompt = serde_json::from_value::<ApiPrompt>(prompt_json("missing"))
            .unwrap()
            .into();
        let err = client_for(&server).update_prompt(prompt).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "not found");
    }

    #[tokio::test]
    async fn test_error_without_envelope_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/prompts"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_prompts().await.unwrap_err();
        assert_eq!(err.status(), 503);
        assert_eq!(err.to_string(), "HTTP error with status: 503");
    }

    #[tokio::test]
    async fn test_network_failure_has_status_zero() {
        let config = ClientConfig {
            api_base_url: "http://127.0.0.1:1/api/v1".to_string(),
            request_timeout_secs: Some(5),
        };
        let err = ApiClient::new(&config)
            .unwrap()
            .get_models()
            .await
            .unwrap_err();
        assert_eq!(err.status(), 0);
        assert!(err.to_string().starts_with("Network error: "));
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      content-type: application/json\r\n\
                      content-length: 100\r\n\r\n\
                      {\"detail\":",
                )
                .await;
            // Closing here leaves the declared body short
        });

        let config = ClientConfig {
            api_base_url: format!("http://{}/api/v1", addr),
            request_timeout_secs: Some(5),
        };
        let err = ApiClient::new(&config)
            .unwrap()
            .get_models()
            .await
            .unwrap_err();
        assert_eq!(err.status(), 500);
        assert_eq!(err.to_string(), "HTTP error with status: 500");
    }

    #[tokio::test]
    async fn test_create_prompt_posts_wire_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/prompts"))
            .and(body_json(prompt_json("new_prompt")))
            .respond_with(ResponseTemplate::new(200).set_body_json(prompt_json("new_prompt")))
            .expect(1)
            .mount(&server)
            .await;

        let prompt: Prompt = serde_json::from_value::<ApiPrompt>(prompt_json("new_prompt"))
            .unwrap()
            .into();
        let created = client_for(&server).create_prompt(prompt.clone()).await.unwrap();
        assert_eq!(created, prompt);
    }

    #[tokio::test]
    async fn test_update_prompt_without_name_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .update_prompt(Prompt::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "Prompt name is required for update");
    }

    #[tokio::test]
    async fn test_delete_prompt_accepts_bare_true() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/prompts/old_prompt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
            .mount(&server)
            .await;

        let response = client_for(&server).delete_prompt("old_prompt").await.unwrap();
        assert_eq!(response.message, "Prompt 'old_prompt' deleted");
    }

    #[tokio::test]
    async fn test_delete_prompt_with_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/prompts/old_prompt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Removed old_prompt"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server).delete_prompt("old_prompt").await.unwrap();
        assert_eq!(response.message, "Removed old_prompt");
    }

    #[tokio::test]
    async fn test_text_body_is_decoded_when_it_is_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/prompts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(json!({"prompts": [prompt_json("p1")]}).to_string()),
            )
            .mount(&server)
            .await;

        let prompts = client_for(&server).get_prompts().await.unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "p1");
    }

    #[tokio::test]
    async fn test_unexpected_text_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_models().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), 0);
    }

    #[tokio::test]
    async fn test_update_and_reset_model() {
        let server = MockServer::start().await;
        let model = json!({
            "metadata": {"name": "llama3:8b", "description": "Llama", "version": "8b"},
            "generation_params": {"temperature": 0.3, "max_tokens": 256}
        });
        Mock::given(method("PUT"))
            .and(path("/api/v1/models/llama3:8b"))
            .and(body_json(json!({"temperature": 0.3, "max_tokens": 256})))
            .respond_with(ResponseTemplate::new(200).set_body_json(model.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/models/llama3:8b/reset"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "model_info": model})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = ModelGenerationParams {
            temperature: 0.3,
            max_tokens: Some(256),
            ..Default::default()
        };
        let updated = client.update_model("llama3:8b", params).await.unwrap();
        assert_eq!(updated.generation_params.max_tokens, Some(256));

        let reset = client.reset_model("llama3:8b").await.unwrap();
        assert_eq!(reset.name(), "llama3:8b");
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/analyze"))
            .and(body_json(json!({
                "text": "We should walk more because it is healthy.",
                "application": "argument_analysis",
                "model_name": "llama3",
                "prompt_name": "argument_analysis_v1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model_used": "llama3",
                "success": true,
                "timestamp": "2025-06-01T12:00:00Z",
                "result": {
                    "arguments": [],
                    "overall_assessment": "No arguments",
                    "credibility_score": 0.0,
                    "argument_count": 0,
                    "well_supported_arguments": 0
                },
                "raw_model_response": "{}",
                "statistics": {
                    "created_at": "2025-06-01T12:00:00Z",
                    "total_duration": 2_500_000_000i64,
                    "load_duration": 500_000_000i64,
                    "load_time_ratio": 0.2,
                    "time_to_first_token": 0.7,
                    "prompt_eval_count": 120,
                    "prompt_eval_duration": 400_000_000i64,
                    "prompt_tokens_per_second": 300.0,
                    "prompt_time_ratio": 0.16,
                    "eval_count": 80,
                    "eval_duration": 1_500_000_000i64,
                    "tokens_per_second": 53.3,
                    "generation_time_ratio": 0.6,
                    "total_throughput_tokens_per_sec": 80.0,
                    "context_length": 2048,
                    "context_window_prompt_fill_rate": 0.06,
                    "context_window_response_fill_rate": 0.04,
                    "overhead_time": 100_000_000i64
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = AnalysisRequest {
            text: "We should walk more because it is healthy.".to_string(),
            application_type: ApplicationType::ArgumentAnalysis,
            model_name: Some("llama3".to_string()),
            prompt_name: Some("argument_analysis_v1".to_string()),
        };
        let response = client_for(&server).analyze_text(request).await.unwrap();
        assert!(response.success);
        let stats = response.statistics.expect("statistics");
        assert_eq!(stats.total_tokens(), 200);
        assert_eq!(stats.context_length, 2048);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig {
            api_base_url: "not a url".to_string(),
            request_timeout_secs: None,
        };
        let err = ApiClient::new(&config).unwrap_err();
        assert_eq!(err.status(), 400);
    }
}
