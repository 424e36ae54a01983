//! Documentation density: docstrings plus comment-to-code-line ratio

use super::{CriterionAnalyzer, Verdict};
use crate::Criterion;
use regex::Regex;

/// Triple-quoted docstring spans. `[^"]*` keeps the match non-greedy across
/// lines without consuming a closing quote.
fn docstring_pattern() -> Regex {
    Regex::new(r#""""[^"]*""""#).unwrap()
}

/// Analyzer that measures documentation coverage
pub struct DocumentationAnalyzer;

impl DocumentationAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocumentationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for DocumentationAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Documentation
    }

    fn evaluate(&self, code: &str) -> Verdict {
        let docstrings = docstring_pattern().find_iter(code).count();

        let mut comment_count = 0usize;
        let mut code_lines = 0usize;
        for line in code.split('\n') {
            let line = line.trim();
            if line.is_empty() || line.starts_with("\"\"\"") {
                continue;
            }
            if line.starts_with('#') {
                comment_count += 1;
            } else if !line.ends_with("\"\"\"") {
                code_lines += 1;
            }
        }

        // Denominator floors at 1 so a comment-only snippet still gets a ratio
        let doc_ratio = (docstrings + comment_count) as f64 / code_lines.max(1) as f64;

        if doc_ratio >= 0.3 && docstrings > 0 {
            Verdict::new(9, "Code is well-documented with clear explanations.")
        } else if doc_ratio >= 0.15 {
            Verdict::new(6, "Code has adequate documentation but could be improved.")
        } else {
            Verdict::new(3, "Code lacks sufficient documentation.")
        }
    }
}
