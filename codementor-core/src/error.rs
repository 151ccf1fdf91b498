//! Error types for the Codementor core.
//!
//! Uses `thiserror` for public API error types. None of these ever reach the
//! caller of the resolver directly: provider and extraction failures are
//! folded into a [`FallbackReason`](crate::mentor::FallbackReason) instead.

/// Top-level error type for the Codementor core library.
#[derive(Debug, thiserror::Error)]
pub enum CodementorError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from LLM provider interactions.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API request failed: {message}")]
    ApiRequest { message: String },

    #[error("API response parse error: {message}")]
    ResponseParse { message: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Provider connection failed: {message}")]
    Connection { message: String },
}

/// Errors from locating and decoding the JSON object embedded in model output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model output ({len} chars)")]
    NoJsonObject { len: usize },

    #[error("embedded JSON object is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("embedded JSON is not an object")]
    NotAnObject,
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

/// A type alias for results using the top-level `CodementorError`.
pub type Result<T> = std::result::Result<T, CodementorError>;
