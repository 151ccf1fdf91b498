//! Google Gemini API provider implementation.
//!
//! Implements the `LlmProvider` trait against the native `generateContent`
//! endpoint. The whole prompt is sent as a single user turn and the reply text
//! is the concatenation of the first candidate's text parts.
//!
//! Auth is via the `?key=API_KEY` query parameter.

use crate::brain::LlmProvider;
use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// The default Google Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

impl GeminiProvider {
    /// Create a provider with an explicitly resolved API key.
    ///
    /// The client carries only a connect timeout; the overall request bound is
    /// applied by the resolver around each call.
    pub fn new_with_key(config: &LlmConfig, api_key: String) -> Result<Self, LlmError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| LlmError::Connection {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Build the JSON request body for the Gemini API.
    fn build_request_body(&self, request: &CompletionRequest) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}],
            }],
            "generationConfig": {
                "maxOutputTokens": request.max_tokens.unwrap_or(self.max_tokens),
                "temperature": request.temperature.unwrap_or(self.temperature),
            },
        })
    }

    /// Parse a Gemini API response JSON into a `CompletionResponse`.
    fn parse_response(body: &Value) -> Result<CompletionResponse, LlmError> {
        let candidates = body["candidates"]
            .as_array()
            .ok_or_else(|| LlmError::ResponseParse {
                message: "Missing 'candidates' array in response".to_string(),
            })?;

        let candidate = candidates.first().ok_or_else(|| LlmError::ResponseParse {
            message: "Empty 'candidates' array in response".to_string(),
        })?;

        let parts = candidate["content"]["parts"]
            .as_array()
            .ok_or_else(|| LlmError::ResponseParse {
                message: "Missing 'parts' array in candidate content".to_string(),
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        let usage_metadata = &body["usageMetadata"];
        let usage = TokenUsage {
            input_tokens: usage_metadata["promptTokenCount"].as_u64().unwrap_or(0) as usize,
            output_tokens: usage_metadata["candidatesTokenCount"].as_u64().unwrap_or(0) as usize,
        };

        Ok(CompletionResponse {
            text,
            usage,
            model: body["modelVersion"]
                .as_str()
                .unwrap_or("gemini")
                .to_string(),
            finish_reason: candidate["finishReason"].as_str().map(str::to_string),
        })
    }

    /// Map an HTTP status code to the appropriate `LlmError`.
    fn map_http_error(status: reqwest::StatusCode, body_text: &str) -> LlmError {
        match status.as_u16() {
            401 | 403 => LlmError::AuthFailed {
                provider: "Gemini".to_string(),
            },
            429 => LlmError::RateLimited {
                retry_after_secs: 30,
            },
            _ => LlmError::ApiRequest {
                message: format!("HTTP {} from Gemini API: {}", status, body_text),
            },
        }
    }

    fn endpoint_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        let body = self.build_request_body(&request);
        let url = self.endpoint_url(model);

        debug!(
            model,
            prompt_chars = request.prompt.len(),
            "Sending Gemini completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest {
                // reqwest errors embed the URL, which carries the key.
                message: format!("Request to Gemini API failed: {}", e.without_url()),
            })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| LlmError::ResponseParse {
            message: format!("Failed to read response body: {}", e.without_url()),
        })?;

        if !status.is_success() {
            return Err(Self::map_http_error(status, &body_text));
        }

        let response_json: Value =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ResponseParse {
                message: format!("Invalid JSON in response: {}", e),
            })?;

        Self::parse_response(&response_json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
