//! The response resolver: one model call per operation, never retried.

use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::extract::extract_json_object;
use super::fallback::{default_learning_plan, fallback_analysis};
use super::model::{AnalysisResult, HistoryEntry, LearningPlan, SkillMap};
use super::normalize::{analysis_from_json, plan_from_json};
use super::prompt::{build_analysis_prompt, build_learning_plan_prompt};
use super::{FallbackReason, Resolution};
use crate::brain::LlmProvider;
use crate::config::ResolverConfig;
use crate::error::LlmError;
use crate::types::CompletionRequest;

/// Resolves code analyses and learning plans against an injected provider.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct Mentor {
    provider: Arc<dyn LlmProvider>,
    request_timeout: Option<Duration>,
}

impl Mentor {
    /// Create a mentor with the default request timeout.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_config(provider, &ResolverConfig::default())
    }

    pub fn with_config(provider: Arc<dyn LlmProvider>, config: &ResolverConfig) -> Self {
        Self {
            provider,
            request_timeout: config.request_timeout(),
        }
    }

    /// Override the bound on each external call. `None` waits indefinitely.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Analyze one code submission.
    ///
    /// Never fails: provider errors, timeouts and unusable replies all yield
    /// [`fallback_analysis`] of the same `code`.
    pub async fn resolve_analysis(
        &self,
        code: &str,
        problem_description: Option<&str>,
    ) -> Resolution<AnalysisResult> {
        let prompt = build_analysis_prompt(code, problem_description);
        match self.request_json(prompt).await {
            Ok(obj) => {
                let result = analysis_from_json(&obj);
                info!(
                    model = self.provider.model_name(),
                    score = result.score,
                    problem_type = %result.problem_type,
                    "Code analysis resolved from model reply"
                );
                Resolution::Succeeded(result)
            }
            Err(reason) => {
                warn!(error = %reason, "Code analysis falling back to offline heuristics");
                Resolution::FellBack {
                    value: fallback_analysis(code),
                    reason,
                }
            }
        }
    }

    /// Generate a study plan from a learner's history and skill levels.
    ///
    /// Never fails: any error yields [`default_learning_plan`].
    pub async fn generate_learning_plan(
        &self,
        history: &[HistoryEntry],
        skills: &SkillMap,
    ) -> Resolution<LearningPlan> {
        let prompt = build_learning_plan_prompt(history, skills);
        match self.request_json(prompt).await {
            Ok(obj) => {
                let plan = plan_from_json(&obj);
                info!(
                    model = self.provider.model_name(),
                    weeks = plan.weekly_goals.len(),
                    "Learning plan resolved from model reply"
                );
                Resolution::Succeeded(plan)
            }
            Err(reason) => {
                warn!(error = %reason, "Learning plan falling back to default plan");
                Resolution::FellBack {
                    value: default_learning_plan(),
                    reason,
                }
            }
        }
    }

    /// Single model call plus JSON extraction.
    async fn request_json(&self, prompt: String) -> Result<Map<String, Value>, FallbackReason> {
        debug!(
            model = self.provider.model_name(),
            prompt_chars = prompt.len(),
            timeout_ms = self.request_timeout.map(|t| t.as_millis() as u64),
            "Requesting model completion"
        );

        let call = self.provider.complete(CompletionRequest::new(prompt));
        let response = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| LlmError::Timeout {
                    timeout_ms: limit.as_millis() as u64,
                })??,
            None => call.await?,
        };

        debug!(
            reply_chars = response.text.len(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            finish_reason = response.finish_reason.as_deref(),
            "Model completion received"
        );

        Ok(extract_json_object(&response.text)?)
    }
}
