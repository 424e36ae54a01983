//! Readability heuristics: line length, naming conventions, indentation

use super::{CriterionAnalyzer, Verdict};
use crate::Criterion;
use regex::Regex;

const BASELINE: i32 = 7;
const MAX_LINE_LENGTH: usize = 100;

/// Conventional one- or two-letter names that are fine for loops/coordinates
const LOOP_NAMES: [&str; 6] = ["i", "j", "k", "x", "y", "z"];

/// Simple assignment-style identifier declarations
fn assignment_pattern() -> Regex {
    Regex::new(r"\b([a-z_][a-z0-9_]*) *=[^=]").unwrap()
}

fn def_pattern() -> Regex {
    Regex::new(r"def\s+([a-zA-Z_][a-zA-Z0-9_]*)").unwrap()
}

fn snake_case_pattern() -> Regex {
    Regex::new(r"^[a-z][a-z0-9_]*$").unwrap()
}

/// Analyzer that checks formatting and naming conventions
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for ReadabilityAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Readability
    }

    fn evaluate(&self, code: &str) -> Verdict {
        let mut score = BASELINE;
        let mut issues: Vec<String> = Vec::new();

        let long_lines = code
            .split('\n')
            .filter(|line| line.trim().chars().count() > MAX_LINE_LENGTH)
            .count();
        if long_lines > 0 {
            issues.push(format!(
                "Found {} lines exceeding recommended length",
                long_lines
            ));
            score -= (long_lines as i32).min(3);
        }

        let short_vars = assignment_pattern()
            .captures_iter(code)
            .filter(|caps| {
                let name = &caps[1];
                name.len() < 3 && !LOOP_NAMES.contains(&name)
            })
            .count();
        if short_vars > 0 {
            issues.push(format!(
                "Found {} variables with overly short names",
                short_vars
            ));
            score -= (short_vars as i32).min(2);
        }

        let non_snake_case = def_pattern()
            .captures_iter(code)
            .filter(|caps| !snake_case_pattern().is_match(&caps[1]))
            .count();
        if non_snake_case > 0 {
            issues.push(format!(
                "Found {} function names not using snake_case",
                non_snake_case
            ));
            score -= (non_snake_case as i32).min(2);
        }

        // Flat penalty when any indented line is off the 4-space grid
        let irregular_indent = code.split('\n').any(|line| {
            let stripped = line.trim_start_matches(' ');
            let width = line.len() - stripped.len();
            !stripped.is_empty() && width > 0 && width % 4 != 0
        });
        if irregular_indent {
            score -= 2;
        }

        if score >= 8 {
            Verdict::new(score, "Code is very readable with good naming and formatting.")
        } else if score >= 5 {
            Verdict::new(
                score,
                format!(
                    "Code has reasonable readability but could be improved. {}",
                    issues.join("\n")
                ),
            )
        } else {
            Verdict::new(
                score,
                format!("Code has readability issues: {}", issues.join("\n")),
            )
        }
    }
}
