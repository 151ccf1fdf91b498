//! Records returned to the caller.
//!
//! Field names serialize in camelCase, matching the JSON shape the model is
//! asked to produce, so `--json` output and model output look alike.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Feedback on one code submission. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub problem_type: String,
    /// Nominally Easy/Medium/Hard, kept as free text.
    pub difficulty: String,
    pub time_complexity: String,
    pub space_complexity: String,
    /// Always within 0..=100.
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub patterns: Vec<String>,
    pub next_challenges: Vec<String>,
    pub resources: Vec<String>,
    pub detailed_feedback: String,
    pub learning_path: LearningPath,
}

/// Three-tier study path attached to an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// Coarse grouping of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreBand::Excellent,
            70..=84 => ScoreBand::Good,
            50..=69 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        };
        f.write_str(label)
    }
}

impl AnalysisResult {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// A four-ish week study plan. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub weekly_goals: Vec<WeeklyGoal>,
    pub recommended_problems: Vec<String>,
    pub concepts: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub week: u32,
    pub focus: String,
    /// Number of problems to solve that week.
    pub problems: u32,
}

/// One solved or attempted problem from the learner's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub problem: String,
    pub difficulty: String,
    pub status: String,
}

impl HistoryEntry {
    pub fn new(problem: &str, difficulty: &str, status: &str) -> Self {
        Self {
            problem: problem.to_string(),
            difficulty: difficulty.to_string(),
            status: status.to_string(),
        }
    }
}

/// Skill category → proficiency percentage.
pub type SkillMap = BTreeMap<String, u8>;
