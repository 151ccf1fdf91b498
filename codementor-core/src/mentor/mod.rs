//! The code-feedback pipeline.
//!
//! prompt → model call → JSON extraction → per-field normalization, with an
//! offline fallback substituted on any failure. Callers always get a fully
//! populated record; [`Resolution`] tells them which path produced it.

pub mod extract;
pub mod fallback;
pub mod heuristics;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod resolver;
pub mod sample;

use crate::error::{ExtractionError, LlmError};

pub use fallback::{default_learning_plan, fallback_analysis};
pub use heuristics::CodeSignals;
pub use model::{
    AnalysisResult, HistoryEntry, LearningPath, LearningPlan, ScoreBand, SkillMap, WeeklyGoal,
};
pub use prompt::{build_analysis_prompt, build_learning_plan_prompt};
pub use resolver::Mentor;

/// Why a request was answered from the fallback instead of the model.
#[derive(Debug, thiserror::Error)]
pub enum FallbackReason {
    #[error("model call failed: {0}")]
    Provider(#[from] LlmError),

    #[error("model reply unusable: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Outcome of one pipeline call. Both variants carry a complete record.
#[derive(Debug)]
pub enum Resolution<T> {
    /// The model replied and its JSON was parsed and normalized.
    Succeeded(T),
    /// The model call or its reply failed; `value` is the fixed fallback.
    FellBack { value: T, reason: FallbackReason },
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Succeeded(value) | Resolution::FellBack { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolution::Succeeded(value) | Resolution::FellBack { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::FellBack { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Resolution::Succeeded(_) => None,
            Resolution::FellBack { reason, .. } => Some(reason),
        }
    }
}
