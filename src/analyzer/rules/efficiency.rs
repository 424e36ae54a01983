//! Efficiency heuristics: inefficient iteration idioms versus comprehensions

use super::{CriterionAnalyzer, Verdict};
use crate::Criterion;
use regex::Regex;

const BASELINE: i32 = 7;

fn range_len_pattern() -> Regex {
    Regex::new(r"for\s+\w+\s+in\s+range\(len\(").unwrap()
}

/// A loop header line immediately followed by an indented inner loop line
fn nested_loop_pattern() -> Regex {
    Regex::new(r"for\s+\w+\s+in[^:]+:[^\n]*\n[^\n]*\s+for\s+\w+\s+in").unwrap()
}

/// Bracketed single-expression comprehension constructs
fn comprehension_pattern() -> Regex {
    Regex::new(r"\[[^\]\[]+for\s+\w+\s+in[^\]\[]+\]").unwrap()
}

/// Analyzer that pattern-matches known efficient and inefficient idioms
pub struct EfficiencyAnalyzer;

impl EfficiencyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EfficiencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for EfficiencyAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Efficiency
    }

    fn evaluate(&self, code: &str) -> Verdict {
        let mut score = BASELINE;
        let mut issues: Vec<String> = Vec::new();

        if code.contains("+= 1") && !code.to_lowercase().contains("counter") {
            issues.push(
                "Consider using more efficient increment methods where applicable".to_string(),
            );
            score -= 1;
        }

        if range_len_pattern().is_match(code) {
            issues.push("Using range(len()) is less readable than direct iteration".to_string());
            score -= 1;
        }

        let nested_loops = nested_loop_pattern().find_iter(code).count();
        if nested_loops > 1 {
            issues.push(format!(
                "Found {} nested loops; consider optimizing if processing large data",
                nested_loops
            ));
            score -= (nested_loops as i32).min(3);
        }

        let comprehensions = comprehension_pattern().find_iter(code).count();
        if comprehensions > 0 {
            score += (comprehensions as i32).min(2);
        }

        if score >= 8 {
            Verdict::new(
                score,
                "Code appears to be efficient with good algorithmic choices.",
            )
        } else if score >= 5 {
            Verdict::new(
                score,
                format!(
                    "Code has reasonable efficiency but could be improved. {}",
                    issues.join("\n")
                ),
            )
        } else {
            Verdict::new(
                score,
                format!("Code has potential efficiency issues: {}", issues.join("\n")),
            )
        }
    }
}
