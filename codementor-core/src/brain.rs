//! The LLM interface.
//!
//! [`LlmProvider`] is the seam between the mentor pipeline and a concrete model
//! API. Production code injects a [`GeminiProvider`](crate::providers::GeminiProvider);
//! tests inject [`MockLlmProvider`] to force success, malformed output or failure.

use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse, TokenUsage};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// A prompt-completion model: one instruction string in, one text string out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Perform a full completion and return the response.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Return the model name.
    fn model_name(&self) -> &str;
}

/// Scripted provider for tests and offline demos.
///
/// Replies are consumed in FIFO order. Once the queue is empty every call
/// fails with `LlmError::Connection`, which drives the resolver onto its
/// fallback path.
pub struct MockLlmProvider {
    model: String,
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockLlmProvider {
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Create a provider whose next call returns `text`.
    pub fn with_response(text: &str) -> Self {
        let provider = Self::new();
        provider.queue_response(text);
        provider
    }

    /// Create a provider whose next call fails with `err`.
    pub fn with_error(err: LlmError) -> Self {
        let provider = Self::new();
        provider.queue_error(err);
        provider
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queue_response(&self, text: &str) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(text.to_string()));
    }

    pub fn queue_error(&self, err: LlmError) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(err));
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn text_response(text: String) -> CompletionResponse {
        CompletionResponse {
            usage: TokenUsage {
                input_tokens: 100,
                output_tokens: text.len() / 4,
            },
            text,
            model: "mock-model".to_string(),
            finish_reason: Some("STOP".to_string()),
        }
    }
}

impl Default for MockLlmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.prompt);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match next {
            Some(Ok(text)) => Ok(Self::text_response(text)),
            Some(Err(err)) => Err(err),
            None => Err(LlmError::Connection {
                message: "mock provider has no queued replies".to_string(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replies_in_order() {
        let provider = MockLlmProvider::new();
        provider.queue_response("first");
        provider.queue_error(LlmError::AuthFailed {
            provider: "mock".into(),
        });

        let first = provider
            .complete(CompletionRequest::new("a"))
            .await
            .unwrap();
        assert_eq!(first.text, "first");

        let second = provider.complete(CompletionRequest::new("b")).await;
        assert!(matches!(second, Err(LlmError::AuthFailed { .. })));

        assert_eq!(provider.prompts(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_empty_queue_fails() {
        let provider = MockLlmProvider::new();
        let result = provider.complete(CompletionRequest::new("x")).await;
        assert!(matches!(result, Err(LlmError::Connection { .. })));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_model_name() {
        assert_eq!(MockLlmProvider::default().model_name(), "mock-model");
    }
}
