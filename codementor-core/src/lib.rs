//! # Codementor Core
//!
//! Core library for Codementor, an LLM-backed coding mentor.
//! Provides the prompt builders, the LLM interface (brain), the Gemini
//! provider, tolerant parsing of model replies, the offline fallback and
//! configuration.

pub mod brain;
pub mod config;
pub mod error;
pub mod mentor;
pub mod providers;
pub mod types;

// Re-export commonly used types at the crate root.
pub use brain::{LlmProvider, MockLlmProvider};
pub use config::{LlmConfig, MentorConfig, ResolverConfig, load_config};
pub use error::{CodementorError, ConfigError, ExtractionError, LlmError, Result};
pub use mentor::{
    AnalysisResult, FallbackReason, HistoryEntry, LearningPath, LearningPlan, Mentor,
    Resolution, ScoreBand, SkillMap, WeeklyGoal,
};
pub use providers::create_provider;
pub use types::{CompletionRequest, CompletionResponse, TokenUsage};
