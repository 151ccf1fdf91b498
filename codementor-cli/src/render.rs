//! Plain-text rendering of analysis results and learning plans.

use codementor_core::{AnalysisResult, LearningPlan, ScoreBand};
use std::fmt::Write;

/// ANSI escape codes for terminal formatting.
mod ansi {
    pub const BOLD_ON: &str = "\x1b[1m";
    pub const BOLD_OFF: &str = "\x1b[22m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const WRAP_WIDTH: usize = 78;

/// Styles text when color output is enabled.
struct Style {
    color: bool,
}

impl Style {
    fn heading(&self, text: &str) -> String {
        if self.color {
            format!("{}{}{}", ansi::BOLD_ON, text, ansi::BOLD_OFF)
        } else {
            text.to_string()
        }
    }

    fn tinted(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn score(&self, score: u8, band: ScoreBand) -> String {
        let code = match band {
            ScoreBand::Excellent | ScoreBand::Good => ansi::GREEN,
            ScoreBand::Fair => ansi::YELLOW,
            ScoreBand::NeedsWork => ansi::RED,
        };
        self.tinted(code, &format!("{}/100 ({})", score, band))
    }
}

fn section(out: &mut String, style: &Style, title: &str, items: &[String]) {
    let _ = writeln!(out, "\n{}", style.heading(title));
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Render an analysis as a multi-section text report.
pub fn render_analysis(result: &AnalysisResult, color: bool) -> String {
    let style = Style { color };
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  [{}]",
        style.heading(&result.problem_type),
        result.difficulty
    );
    let _ = writeln!(
        out,
        "Score: {}",
        style.score(result.score, result.score_band())
    );
    let _ = writeln!(
        out,
        "Time: {}   Space: {}",
        style.tinted(ansi::CYAN, &result.time_complexity),
        style.tinted(ansi::CYAN, &result.space_complexity)
    );

    section(&mut out, &style, "Strengths", &result.strengths);
    section(&mut out, &style, "Improvements", &result.improvements);
    section(&mut out, &style, "Patterns", &result.patterns);

    let _ = writeln!(out, "\n{}", style.heading("Feedback"));
    for line in textwrap::wrap(&result.detailed_feedback, WRAP_WIDTH - 2) {
        let _ = writeln!(out, "  {}", line);
    }

    section(&mut out, &style, "Next Challenges", &result.next_challenges);
    section(&mut out, &style, "Resources", &result.resources);

    let path = &result.learning_path;
    section(&mut out, &style, "Learning Path: Immediate", &path.immediate);
    section(&mut out, &style, "Learning Path: Short Term", &path.short_term);
    section(&mut out, &style, "Learning Path: Long Term", &path.long_term);

    out
}

/// Render a learning plan as a week-by-week schedule.
pub fn render_plan(plan: &LearningPlan, color: bool) -> String {
    let style = Style { color };
    let mut out = String::new();

    let _ = writeln!(out, "{}", style.heading("Weekly Goals"));
    for goal in &plan.weekly_goals {
        let _ = writeln!(
            out,
            "  Week {}: {} ({} problems)",
            goal.week, goal.focus, goal.problems
        );
    }

    section(
        &mut out,
        &style,
        "Recommended Problems",
        &plan.recommended_problems,
    );
    section(&mut out, &style, "Concepts", &plan.concepts);
    section(&mut out, &style, "Resources", &plan.resources);

    out
}
