//! Turn a parsed-but-untrusted JSON object into a fully populated record.
//!
//! Each field is read independently. A field that is missing, null, empty
//! (for strings) or of the wrong shape takes its fixed default; the others are
//! unaffected.

use serde_json::{Map, Value};

use super::fallback::{default_weekly_goals, defaults, owned};
use super::model::{AnalysisResult, LearningPath, LearningPlan, WeeklyGoal};

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    text(obj, key).unwrap_or_else(|| default.to_string())
}

/// String items of an array. Numbers and booleans are stringified; nested
/// arrays, objects and nulls are dropped.
fn list(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = obj.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
    )
}

fn list_or(obj: &Map<String, Value>, key: &str, default: &[&str]) -> Vec<String> {
    list(obj, key).unwrap_or_else(|| owned(default))
}

/// Read a numeric value, accepting numeric strings such as `"85"` or `"85/100"`.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let head = s.split('/').next().unwrap_or(s).trim();
            head.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Score clamped into 0..=100 and rounded.
fn score(obj: &Map<String, Value>) -> Option<u8> {
    let raw = obj.get("score").and_then(number)?;
    if !raw.is_finite() {
        return None;
    }
    Some(raw.clamp(0.0, 100.0).round() as u8)
}

fn learning_path(obj: &Map<String, Value>) -> LearningPath {
    let empty = Map::new();
    let path = obj
        .get("learningPath")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    LearningPath {
        immediate: list_or(path, "immediate", defaults::IMMEDIATE),
        short_term: list_or(path, "shortTerm", defaults::SHORT_TERM),
        long_term: list_or(path, "longTerm", defaults::LONG_TERM),
    }
}

/// Build an [`AnalysisResult`] from a model reply object.
pub fn analysis_from_json(obj: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        problem_type: text_or(obj, "problemType", defaults::PROBLEM_TYPE),
        difficulty: text_or(obj, "difficulty", defaults::DIFFICULTY),
        time_complexity: text_or(obj, "timeComplexity", defaults::TIME_COMPLEXITY),
        space_complexity: text_or(obj, "spaceComplexity", defaults::SPACE_COMPLEXITY),
        score: score(obj).unwrap_or(defaults::SCORE),
        strengths: list_or(obj, "strengths", defaults::STRENGTHS),
        improvements: list_or(obj, "improvements", defaults::IMPROVEMENTS),
        patterns: list_or(obj, "patterns", defaults::PATTERNS),
        next_challenges: list_or(obj, "nextChallenges", defaults::NEXT_CHALLENGES),
        resources: list_or(obj, "resources", defaults::RESOURCES),
        detailed_feedback: text_or(obj, "detailedFeedback", defaults::DETAILED_FEEDBACK),
        learning_path: learning_path(obj),
    }
}

/// Weekly goals from the reply. Entries without a focus are skipped; a missing
/// week number becomes the entry's 1-based position; a missing problem count
/// becomes 0. Returns `None` when the key is absent or yields no goals, so a
/// plan never has an empty schedule. Other lists keep an empty value as given.
fn weekly_goals(obj: &Map<String, Value>) -> Option<Vec<WeeklyGoal>> {
    let entries = obj.get("weeklyGoals")?.as_array()?;
    let goals: Vec<WeeklyGoal> = entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let entry = entry.as_object()?;
            let focus = text(entry, "focus")?;
            let week = entry
                .get("week")
                .and_then(number)
                .filter(|w| w.is_finite() && *w >= 1.0)
                .map(|w| w as u32)
                .unwrap_or(idx as u32 + 1);
            let problems = entry
                .get("problems")
                .and_then(number)
                .filter(|p| p.is_finite() && *p >= 0.0)
                .map(|p| p.round() as u32)
                .unwrap_or(0);
            Some(WeeklyGoal {
                week,
                focus,
                problems,
            })
        })
        .collect();
    (!goals.is_empty()).then_some(goals)
}

/// Build a [`LearningPlan`] from a model reply object.
pub fn plan_from_json(obj: &Map<String, Value>) -> LearningPlan {
    LearningPlan {
        weekly_goals: weekly_goals(obj).unwrap_or_else(default_weekly_goals),
        recommended_problems: list_or(obj, "recommendedProblems", defaults::RECOMMENDED_PROBLEMS),
        concepts: list_or(obj, "concepts", defaults::CONCEPTS),
        resources: list_or(obj, "resources", defaults::PLAN_RESOURCES),
    }
}
