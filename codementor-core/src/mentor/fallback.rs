//! Fixed records used when the model is unavailable or its reply is unusable,
//! plus the per-field defaults applied to incomplete replies.

use super::heuristics::CodeSignals;
use super::model::{AnalysisResult, LearningPath, LearningPlan, WeeklyGoal};

/// Score reported by the offline fallback, independent of the code.
pub const FALLBACK_SCORE: u8 = 75;

/// Per-field defaults for a parsed analysis that omits fields.
pub mod defaults {
    pub const PROBLEM_TYPE: &str = "Unknown Problem";
    pub const DIFFICULTY: &str = "Medium";
    pub const TIME_COMPLEXITY: &str = "O(n)";
    pub const SPACE_COMPLEXITY: &str = "O(1)";
    pub const SCORE: u8 = 75;
    pub const STRENGTHS: &[&str] = &["Code compiles successfully"];
    pub const IMPROVEMENTS: &[&str] = &["Consider edge cases"];
    pub const PATTERNS: &[&str] = &["Basic Algorithm"];
    pub const NEXT_CHALLENGES: &[&str] = &["Similar problems"];
    pub const RESOURCES: &[&str] = &["Algorithm documentation"];
    pub const DETAILED_FEEDBACK: &str = "Good attempt at solving the problem.";
    pub const IMMEDIATE: &[&str] = &["Practice more problems"];
    pub const SHORT_TERM: &[&str] = &["Study algorithms"];
    pub const LONG_TERM: &[&str] = &["Master data structures"];

    pub const WEEKLY_GOALS: &[(u32, &str, u32)] = &[
        (1, "Arrays and Strings", 10),
        (2, "Linked Lists", 8),
        (3, "Trees and Graphs", 12),
        (4, "Dynamic Programming", 6),
    ];
    pub const RECOMMENDED_PROBLEMS: &[&str] = &[
        "Two Sum",
        "Valid Parentheses",
        "Merge Two Sorted Lists",
        "Maximum Subarray",
        "Climbing Stairs",
    ];
    pub const CONCEPTS: &[&str] = &["Two Pointers", "Hash Maps", "DFS/BFS", "Dynamic Programming"];
    pub const PLAN_RESOURCES: &[&str] = &[
        "LeetCode Patterns Guide",
        "Algorithm Visualization Tools",
        "Interview Preparation Books",
    ];
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Analysis computed without any network access.
///
/// Only the three [`CodeSignals`] vary the output; the score is always
/// [`FALLBACK_SCORE`].
pub fn fallback_analysis(code: &str) -> AnalysisResult {
    let signals = CodeSignals::detect(code);

    AnalysisResult {
        problem_type: "Code Analysis".to_string(),
        difficulty: "Medium".to_string(),
        time_complexity: (if signals.has_loop { "O(n)" } else { "O(1)" }).to_string(),
        space_complexity: (if signals.has_hash_storage { "O(n)" } else { "O(1)" }).to_string(),
        score: FALLBACK_SCORE,
        strengths: owned(&[
            "Code structure is readable",
            "Proper variable naming",
            if signals.has_loop {
                "Uses iteration effectively"
            } else {
                "Efficient approach"
            },
            "Handles basic cases",
        ]),
        improvements: owned(&[
            "Add input validation",
            "Consider edge cases",
            "Add comments for clarity",
            "Optimize for better performance",
        ]),
        patterns: owned(&[
            if signals.has_loop {
                "Iteration Pattern"
            } else {
                "Direct Computation"
            },
            if signals.has_hash_storage {
                "Hash Map Usage"
            } else {
                "Linear Processing"
            },
            if signals.has_recursion {
                "Recursive Approach"
            } else {
                "Iterative Approach"
            },
        ]),
        next_challenges: owned(&[
            "Similar complexity problems",
            "Optimization challenges",
            "Edge case variations",
            "Pattern-based problems",
        ]),
        resources: owned(&[
            "Algorithm Fundamentals",
            "Time Complexity Guide",
            "Best Practices Documentation",
            "Problem-solving Patterns",
        ]),
        detailed_feedback: "Your solution demonstrates a solid understanding of the problem. \
            The code is well-structured and readable. Focus on optimizing the algorithm and \
            handling edge cases to improve your solution further."
            .to_string(),
        learning_path: LearningPath {
            immediate: owned(&["Practice similar problems", "Study time complexity"]),
            short_term: owned(&["Master common patterns", "Improve code optimization"]),
            long_term: owned(&["Advanced algorithms", "System design concepts"]),
        },
    }
}

pub fn default_weekly_goals() -> Vec<WeeklyGoal> {
    defaults::WEEKLY_GOALS
        .iter()
        .map(|&(week, focus, problems)| WeeklyGoal {
            week,
            focus: focus.to_string(),
            problems,
        })
        .collect()
}

/// The plan substituted when plan generation fails.
pub fn default_learning_plan() -> LearningPlan {
    LearningPlan {
        weekly_goals: default_weekly_goals(),
        recommended_problems: owned(defaults::RECOMMENDED_PROBLEMS),
        concepts: owned(defaults::CONCEPTS),
        resources: owned(defaults::PLAN_RESOURCES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_for_trivial_python() {
        let result = fallback_analysis("def f(x): return x");
        assert_eq!(result.difficulty, "Medium");
        assert_eq!(result.time_complexity, "O(1)");
        assert_eq!(result.space_complexity, "O(1)");
        assert_eq!(result.score, 75);
        assert_eq!(
            result.patterns,
            vec!["Direct Computation", "Linear Processing", "Iterative Approach"]
        );
        assert_eq!(result.strengths[2], "Efficient approach");
    }

    #[test]
    fn test_fallback_with_loop_and_map() {
        let code = "seen = {}\nfor i, n in enumerate(nums):\n    seen[n] = i\n";
        let result = fallback_analysis(code);
        assert_eq!(result.time_complexity, "O(n)");
        assert_eq!(result.space_complexity, "O(n)");
        assert_eq!(result.strengths[2], "Uses iteration effectively");
        assert_eq!(result.patterns[0], "Iteration Pattern");
        assert_eq!(result.patterns[1], "Hash Map Usage");
        assert_eq!(result.score, FALLBACK_SCORE);
    }

    #[test]
    fn test_fallback_recursive_pattern() {
        let code = "def fact(n):\n    return 1 if n <= 1 else n * fact(n - 1)\n";
        let result = fallback_analysis(code);
        assert_eq!(result.patterns[2], "Recursive Approach");
    }

    #[test]
    fn test_fallback_list_sizes() {
        let result = fallback_analysis("");
        assert_eq!(result.strengths.len(), 4);
        assert_eq!(result.improvements.len(), 4);
        assert_eq!(result.patterns.len(), 3);
        assert_eq!(result.next_challenges.len(), 4);
        assert_eq!(result.resources.len(), 4);
        assert_eq!(result.learning_path.immediate.len(), 2);
        assert!(!result.detailed_feedback.is_empty());
    }

    #[test]
    fn test_default_learning_plan() {
        let plan = default_learning_plan();
        assert_eq!(plan.weekly_goals.len(), 4);
        assert_eq!(
            plan.weekly_goals[2],
            WeeklyGoal {
                week: 3,
                focus: "Trees and Graphs".to_string(),
                problems: 12,
            }
        );
        assert_eq!(plan.recommended_problems.len(), 5);
        assert_eq!(plan.concepts.len(), 4);
        assert_eq!(plan.resources.len(), 3);
    }
}
