//! Prompt construction.
//!
//! Both builders are pure: no validation, no I/O, no failure mode. Guarding
//! against empty submissions is the caller's job.

use super::model::{HistoryEntry, SkillMap};

/// JSON shape requested for a code analysis. Kept in sync with
/// [`AnalysisResult`](super::AnalysisResult)'s serialized field names.
const ANALYSIS_SCHEMA: &str = r#"{
  "problemType": "Identify the problem type (e.g., Two Sum, Binary Search, etc.)",
  "difficulty": "Easy/Medium/Hard",
  "timeComplexity": "Big O notation",
  "spaceComplexity": "Big O notation",
  "score": "Score out of 100 based on code quality, efficiency, and best practices",
  "strengths": ["List 3-4 specific strengths of this solution"],
  "improvements": ["List 3-4 specific areas for improvement"],
  "patterns": ["List algorithmic patterns used (e.g., Two Pointers, Sliding Window, etc.)"],
  "nextChallenges": ["Suggest 3-4 related problems to practice next"],
  "resources": ["Suggest 3-4 learning resources for improvement"],
  "detailedFeedback": "Provide detailed paragraph explaining the solution approach, what's good, what could be better, and why",
  "learningPath": {
    "immediate": ["2-3 concepts to focus on this week"],
    "shortTerm": ["2-3 concepts to master in the next month"],
    "longTerm": ["2-3 advanced topics for long-term growth"]
  }
}"#;

const EVALUATION_CRITERIA: &[&str] = &[
    "Code quality and readability",
    "Algorithm efficiency and optimization opportunities",
    "Common patterns and techniques used",
    "Specific, actionable improvement suggestions",
    "Personalized learning recommendations based on the code style and approach",
    "Interview readiness and best practices",
];

const PLAN_SCHEMA: &str = r#"{
  "weeklyGoals": [{"week": 1, "focus": "Topic for the week", "problems": 10}],
  "recommendedProblems": ["Problem names to solve next"],
  "concepts": ["Concepts to focus on"],
  "resources": ["Resources for improvement"],
  "milestones": ["Milestones to track progress"]
}"#;

/// Build the instruction string for analyzing one code submission.
///
/// The code is embedded verbatim inside a fenced block. A blank problem
/// description is treated as absent.
pub fn build_analysis_prompt(code: &str, problem_description: Option<&str>) -> String {
    let context = problem_description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!("Problem Context: {}\n\n", d))
        .unwrap_or_default();

    let criteria: String = EVALUATION_CRITERIA
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}\n", i + 1, c))
        .collect();

    format!(
        "As an expert coding mentor and algorithm specialist, analyze the following code solution \
         and provide comprehensive feedback for a student preparing for technical interviews.\n\n\
         {context}\
         Code to analyze:\n```\n{code}\n```\n\n\
         Please provide a detailed analysis in the following JSON format:\n\n\
         {schema}\n\n\
         Focus on:\n{criteria}\n\
         Provide constructive, encouraging feedback that helps the student grow.\n",
        context = context,
        code = code,
        schema = ANALYSIS_SCHEMA,
        criteria = criteria,
    )
}

/// Build the instruction string for a personalized learning plan.
pub fn build_learning_plan_prompt(history: &[HistoryEntry], skills: &SkillMap) -> String {
    // Plain data structs; serialization cannot fail in practice.
    let history_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    let skills_json = serde_json::to_string(skills).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Based on the following user coding history and current skill levels, create a \
         personalized learning plan:\n\n\
         User History: {history_json}\n\
         Current Skills: {skills_json}\n\n\
         Create a comprehensive learning plan with:\n\
         1. Weekly goals for the next 4 weeks\n\
         2. Recommended problems to solve\n\
         3. Concepts to focus on\n\
         4. Resources for improvement\n\
         5. Milestones to track progress\n\n\
         Format as JSON with this structure:\n\n\
         {schema}\n",
        history_json = history_json,
        skills_json = skills_json,
        schema = PLAN_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_code_in_fence() {
        let code = "fn main() {\n    println!(\"hi\");\n}";
        let prompt = build_analysis_prompt(code, None);
        assert!(prompt.contains(&format!("```\n{}\n```", code)));
        assert!(!prompt.contains("Problem Context"));
    }

    #[test]
    fn test_analysis_prompt_includes_description() {
        let prompt = build_analysis_prompt("x = 1", Some("  Return the sum of two numbers "));
        assert!(prompt.contains("Problem Context: Return the sum of two numbers\n"));
    }

    #[test]
    fn test_analysis_prompt_blank_description_is_absent() {
        let prompt = build_analysis_prompt("x = 1", Some("   "));
        assert!(!prompt.contains("Problem Context"));
    }

    #[test]
    fn test_analysis_prompt_lists_every_schema_field() {
        let prompt = build_analysis_prompt("x", None);
        for field in [
            "\"problemType\"",
            "\"difficulty\"",
            "\"timeComplexity\"",
            "\"spaceComplexity\"",
            "\"score\"",
            "\"strengths\"",
            "\"improvements\"",
            "\"patterns\"",
            "\"nextChallenges\"",
            "\"resources\"",
            "\"detailedFeedback\"",
            "\"learningPath\"",
            "\"immediate\"",
            "\"shortTerm\"",
            "\"longTerm\"",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_analysis_prompt_lists_criteria_in_order() {
        let prompt = build_analysis_prompt("x", None);
        assert!(prompt.contains("1. Code quality and readability\n"));
        assert!(prompt.contains("6. Interview readiness and best practices\n"));
    }

    #[test]
    fn test_analysis_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(ANALYSIS_SCHEMA).unwrap();
        assert!(schema["learningPath"]["shortTerm"].is_array());
        let plan: serde_json::Value = serde_json::from_str(PLAN_SCHEMA).unwrap();
        assert!(plan["weeklyGoals"].is_array());
    }

    #[test]
    fn test_plan_prompt_embeds_history_and_skills() {
        let history = vec![HistoryEntry::new("Two Sum", "Easy", "completed")];
        let mut skills = SkillMap::new();
        skills.insert("Arrays".to_string(), 85);
        skills.insert("DP".to_string(), 30);

        let prompt = build_learning_plan_prompt(&history, &skills);
        assert!(prompt.contains(
            r#"User History: [{"problem":"Two Sum","difficulty":"Easy","status":"completed"}]"#
        ));
        assert!(prompt.contains(r#"Current Skills: {"Arrays":85,"DP":30}"#));
        assert!(prompt.contains("Weekly goals for the next 4 weeks"));
    }

    #[test]
    fn test_plan_prompt_empty_inputs() {
        let prompt = build_learning_plan_prompt(&[], &SkillMap::new());
        assert!(prompt.contains("User History: []\n"));
        assert!(prompt.contains("Current Skills: {}\n"));
    }
}
