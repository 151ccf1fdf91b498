//! LLM provider implementations.
//!
//! Use `create_provider()` to instantiate the configured provider. The result
//! is an `Arc<dyn LlmProvider>` that is handed to the mentor explicitly.

pub mod gemini;

use crate::brain::LlmProvider;
use crate::config::LlmConfig;
use crate::error::{CodementorError, ConfigError};
use std::sync::Arc;

pub use gemini::GeminiProvider;

/// Key used when no real key is configured. Calls made with it are expected to
/// be rejected by the provider, which routes every request to the fallback.
pub const PLACEHOLDER_API_KEY: &str = "demo-key";

/// Where the API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Inline,
    Environment,
    Placeholder,
}

/// Resolve the API key for a provider.
///
/// Order: inline `api_key`, then the `api_key_env` variable, then
/// [`PLACEHOLDER_API_KEY`]. Empty values are treated as unset.
pub fn resolve_api_key(config: &LlmConfig) -> (String, KeySource) {
    if let Some(key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        return (key.to_string(), KeySource::Inline);
    }
    match std::env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => (key, KeySource::Environment),
        _ => {
            tracing::warn!(
                env_var = %config.api_key_env,
                "No API key configured; using placeholder key, responses will use offline fallback"
            );
            (PLACEHOLDER_API_KEY.to_string(), KeySource::Placeholder)
        }
    }
}

/// Create an LLM provider based on the configuration.
///
/// A missing API key is not an error. An unknown provider name is.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, CodementorError> {
    for warning in config.validate() {
        tracing::warn!(%warning, "LLM configuration warning");
    }

    match config.provider.as_str() {
        "gemini" => {
            let (api_key, source) = resolve_api_key(config);
            tracing::debug!(?source, model = %config.model, "Creating Gemini provider");
            Ok(Arc::new(GeminiProvider::new_with_key(config, api_key)?))
        }
        other => Err(ConfigError::UnsupportedProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(env: &str) -> LlmConfig {
        LlmConfig {
            api_key_env: env.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_inline_key_wins() {
        // SAFETY: test-only env var manipulation
        unsafe { std::env::set_var("CODEMENTOR_TEST_KEY_INLINE", "from-env") };
        let mut config = test_config("CODEMENTOR_TEST_KEY_INLINE");
        config.api_key = Some("inline-key".to_string());
        assert_eq!(
            resolve_api_key(&config),
            ("inline-key".to_string(), KeySource::Inline)
        );
        // SAFETY: test-only env var manipulation
        unsafe { std::env::remove_var("CODEMENTOR_TEST_KEY_INLINE") };
    }

    #[test]
    fn test_resolve_env_key() {
        // SAFETY: test-only env var manipulation
        unsafe { std::env::set_var("CODEMENTOR_TEST_KEY_ENV", "sk-env") };
        let config = test_config("CODEMENTOR_TEST_KEY_ENV");
        assert_eq!(
            resolve_api_key(&config),
            ("sk-env".to_string(), KeySource::Environment)
        );
        // SAFETY: test-only env var manipulation
        unsafe { std::env::remove_var("CODEMENTOR_TEST_KEY_ENV") };
    }

    #[test]
    fn test_resolve_missing_key_uses_placeholder() {
        // SAFETY: test-only env var manipulation
        unsafe { std::env::remove_var("CODEMENTOR_TEST_KEY_MISSING") };
        let mut config = test_config("CODEMENTOR_TEST_KEY_MISSING");
        config.api_key = Some("   ".to_string());
        assert_eq!(
            resolve_api_key(&config),
            (PLACEHOLDER_API_KEY.to_string(), KeySource::Placeholder)
        );
    }

    #[test]
    fn test_create_provider_gemini() {
        let config = LlmConfig {
            model: "test-model".to_string(),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.model_name(), "test-model");
    }

    #[test]
    fn test_create_provider_without_key_still_succeeds() {
        // SAFETY: test-only env var manipulation
        unsafe { std::env::remove_var("CODEMENTOR_TEST_KEY_ABSENT") };
        let config = test_config("CODEMENTOR_TEST_KEY_ABSENT");
        assert!(create_provider(&config).is_ok());
    }

    #[test]
    fn test_create_provider_unknown() {
        let config = LlmConfig {
            provider: "palm".to_string(),
            ..Default::default()
        };
        match create_provider(&config) {
            Err(CodementorError::Config(ConfigError::UnsupportedProvider { provider })) => {
                assert_eq!(provider, "palm");
            }
            Err(other) => panic!("Expected UnsupportedProvider, got {:?}", other),
            Ok(_) => panic!("Expected an error for unknown provider"),
        }
    }
}
