//! Configuration system for Codementor.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> overrides.
//! Configuration is loaded from `~/.config/codementor/config.toml` and/or
//! `.codementor/config.toml` in the workspace directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorConfig {
    pub llm: LlmConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name. Only `"gemini"` is supported.
    pub provider: String,
    /// Model identifier (e.g., "gemini-pro", "gemini-2.0-flash").
    pub model: String,
    /// Environment variable name containing the API key.
    pub api_key_env: String,
    /// Inline API key. Takes precedence over `api_key_env` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Optional base URL override for the API endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum tokens to generate in a response.
    pub max_tokens: usize,
    /// Default temperature for generation.
    pub temperature: f32,
    /// TCP connect timeout for the HTTP client.
    pub connect_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-pro".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: None,
            max_tokens: 4096,
            temperature: 0.7,
            connect_timeout_secs: 10,
        }
    }
}

impl LlmConfig {
    /// Validate this LLM config and return any warnings.
    ///
    /// Returns an empty Vec if the config is valid. Problems are reported as
    /// human-readable warnings rather than errors.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.provider != "gemini" {
            warnings.push(format!(
                "provider '{}' is not supported; only 'gemini' is available",
                self.provider
            ));
        }
        if self.model.trim().is_empty() {
            warnings.push("model is empty; every request will fall back".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            warnings.push(format!(
                "temperature ({}) is outside the accepted range 0.0..=2.0",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            warnings.push("max_tokens is 0; the model cannot produce a reply".to_string());
        }
        warnings
    }
}

/// Settings for the response resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upper bound on a single external model call. Zero disables the bound.
    pub request_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl ResolverConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("dev", "codementor", "codementor")
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `CODEMENTOR_`)
/// 3. Workspace-local config (`.codementor/config.toml`)
/// 4. User config (`~/.config/codementor/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&MentorConfig>,
) -> Result<MentorConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(MentorConfig::default()));

    if let Some(dirs) = project_dirs() {
        let user_config = dirs.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".codementor").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // CODEMENTOR_LLM__MODEL, CODEMENTOR_RESOLVER__REQUEST_TIMEOUT_SECS, ...
    figment = figment.merge(Env::prefixed("CODEMENTOR_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    Ok(figment.extract()?)
}

/// Check whether any configuration file exists (user-level or workspace-level).
pub fn config_exists(workspace: Option<&Path>) -> bool {
    if let Some(dirs) = project_dirs()
        && dirs.config_dir().join("config.toml").exists()
    {
        return true;
    }

    workspace.is_some_and(|ws| ws.join(".codementor").join("config.toml").exists())
}

/// Directory for rolling log files, falling back to the current directory.
pub fn log_dir() -> std::path::PathBuf {
    project_dirs()
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MentorConfig::default();
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.model, "gemini-pro");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.resolver.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = MentorConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: MentorConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.llm.model, config.llm.model);
        assert_eq!(
            deserialized.resolver.request_timeout_secs,
            config.resolver.request_timeout_secs
        );
    }

    #[test]
    fn test_load_config_with_overrides() {
        let mut overrides = MentorConfig::default();
        overrides.llm.model = "gemini-2.0-flash".to_string();
        overrides.resolver.request_timeout_secs = 5;

        let config = load_config(None, Some(&overrides)).unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.resolver.request_timeout_secs, 5);
    }

    #[test]
    fn test_load_config_from_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let ws_dir = dir.path().join(".codementor");
        std::fs::create_dir_all(&ws_dir).unwrap();
        std::fs::write(
            ws_dir.join("config.toml"),
            r#"
[llm]
model = "gemini-1.5-pro"
temperature = 0.2

[resolver]
request_timeout_secs = 12
"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()), None).unwrap();
        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert!((config.llm.temperature - 0.2).abs() < f32::EPSILON);
        // Untouched keys keep their defaults.
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.resolver.request_timeout_secs, 12);
        assert!(config_exists(Some(dir.path())));
    }

    #[test]
    fn test_load_config_rejects_malformed_values() {
        let dir = tempfile::tempdir().unwrap();
        let ws_dir = dir.path().join(".codementor");
        std::fs::create_dir_all(&ws_dir).unwrap();
        std::fs::write(
            ws_dir.join("config.toml"),
            "[resolver]\nrequest_timeout_secs = \"soon\"\n",
        )
        .unwrap();

        let err = load_config(Some(dir.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(LlmConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_problems() {
        let config = LlmConfig {
            provider: "openai".to_string(),
            temperature: 3.5,
            max_tokens: 0,
            ..Default::default()
        };
        let warnings = config.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("openai"));
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = ResolverConfig {
            request_timeout_secs: 0,
        };
        assert!(config.request_timeout().is_none());
        assert_eq!(
            ResolverConfig::default().request_timeout(),
            Some(Duration::from_secs(30))
        );
    }
}
