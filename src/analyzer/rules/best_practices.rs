//! Best-practice heuristics: globals, magic numbers, exception hygiene,
//! and context-manager usage

use super::{CriterionAnalyzer, Verdict};
use crate::Criterion;
use regex::Regex;

const BASELINE: i32 = 7;
const ALLOWED_GLOBALS: usize = 3;
const ALLOWED_MAGIC_NUMBERS: usize = 5;

/// Top-level simple assignments (start of line)
fn global_assignment_pattern() -> Regex {
    Regex::new(r"(?m)^([a-zA-Z_][a-zA-Z0-9_]*)\s*=[^=]").unwrap()
}

/// Candidate magic-number literals. The longer alternative comes first
/// because the regex crate has no lookahead; `count_magic_numbers` rejects
/// matches followed by a digit or decimal point.
fn magic_number_pattern() -> Regex {
    Regex::new(r"[^\w.]([1-9][0-9]+|[2-9])").unwrap()
}

/// Count numeric literals >= 2 that are not part of a larger number or a
/// decimal. 0, 1 and -1 are treated as conventional, not magic.
fn count_magic_numbers(code: &str) -> usize {
    magic_number_pattern()
        .find_iter(code)
        .filter(|m| {
            !matches!(
                code[m.end()..].chars().next(),
                Some(c) if c.is_ascii_digit() || c == '.'
            )
        })
        .count()
}

/// Analyzer that checks adherence to common best practices
pub struct BestPracticesAnalyzer;

impl BestPracticesAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestPracticesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for BestPracticesAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::BestPractices
    }

    fn evaluate(&self, code: &str) -> Verdict {
        let mut score = BASELINE;
        let mut issues: Vec<String> = Vec::new();
        let mut positives: Vec<String> = Vec::new();

        // A few module-level assignments are okay
        let global_vars = global_assignment_pattern().find_iter(code).count();
        if global_vars > ALLOWED_GLOBALS {
            issues.push(format!("Uses {} global variables", global_vars));
            score -= (global_vars as i32 - ALLOWED_GLOBALS as i32).min(2);
        }

        let magic_numbers = count_magic_numbers(code);
        if magic_numbers > ALLOWED_MAGIC_NUMBERS {
            issues.push(format!(
                "Contains {} magic numbers that should be constants",
                magic_numbers
            ));
            score -= (magic_numbers as i32 / 5).min(2);
        }

        let try_blocks = code.matches("try:").count();
        let except_blocks = code.matches("except").count();
        if try_blocks > 0 && try_blocks == except_blocks && !code.contains("except:") {
            positives.push("Uses proper exception handling".to_string());
            score += 1;
        } else if code.contains("except:") {
            issues.push("Uses bare except clauses without specifying exception types".to_string());
            score -= 1;
        }

        let with_count = code.matches("with").count();
        if with_count > 0 {
            positives.push(format!("Uses context managers ({} with statements)", with_count));
            score += (with_count as i32).min(2);
        }

        if score >= 8 {
            Verdict::new(
                score,
                format!("Code follows best practices well. {}", positives.join(", ")),
            )
        } else if score >= 5 {
            Verdict::new(
                score,
                format!(
                    "Code follows most best practices but has some issues. {}",
                    issues.join(", ")
                ),
            )
        } else {
            Verdict::new(
                score,
                format!("Code has several best practice issues: {}", issues.join(", ")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_code_keeps_baseline() {
        let verdict = BestPracticesAnalyzer::new().evaluate("def add(a, b):\n    return a + b\n");
        assert_eq!(verdict.score, BASELINE);
        assert!(verdict
            .message
            .starts_with("Code follows most best practices"));
    }

    #[test]
    fn specific_handlers_earn_bonus() {
        let code = "try:\n    risky()\nexcept ValueError:\n    pass\n";
        let verdict = BestPracticesAnalyzer::new().evaluate(code);
        assert_eq!(verdict.score, 8);
        assert!(verdict.message.contains("Uses proper exception handling"));
    }

    #[test]
    fn bare_except_is_penalized() {
        let code = "try:\n    risky()\nexcept:\n    pass\n";
        let verdict = BestPracticesAnalyzer::new().evaluate(code);
        assert_eq!(verdict.score, 6);
        assert!(verdict.message.contains("bare except clauses"));
    }

    #[test]
    fn context_managers_earn_bonus() {
        let code = "with open(path) as f:\n    data = f.read()\n";
        let verdict = BestPracticesAnalyzer::new().evaluate(code);
        assert_eq!(verdict.score, 8);
        assert!(verdict.message.contains("context managers (1 with statements)"));
    }

    #[test]
    fn many_globals_are_penalized() {
        let code = "a = 1\nb = 1\nc = 1\nd = 1\ne = 1\nf = 1\n";
        let verdict = BestPracticesAnalyzer::new().evaluate(code);
        // 6 globals: deduction min(6 - 3, 2) = 2
        assert_eq!(verdict.score, 5);
        assert!(verdict.message.contains("Uses 6 global variables"));
    }

    #[test]
    fn indented_assignments_are_not_globals() {
        let code = "def f():\n    value = 1\n    return value\n";
        assert_eq!(global_assignment_pattern().find_iter(code).count(), 0);
    }

    #[test]
    fn magic_number_counting() {
        // 2 and 37 count; 0, 1, 2.5 and the decimal tail do not
        assert_eq!(count_magic_numbers("x = 2\ny = 37\nz = 0\nw = 1\nv = 2.5\n"), 2);
        // Multi-digit literal is one match, not one per digit
        assert_eq!(count_magic_numbers(" 123 "), 1);
        // Part of an identifier does not count
        assert_eq!(count_magic_numbers("var2 = 1\n"), 0);
    }

    #[test]
    fn many_magic_numbers_are_penalized() {
        let code = "xs = (21, 32, 43, 54, 65, 76)\n";
        let verdict = BestPracticesAnalyzer::new().evaluate(code);
        // 6 magic numbers: deduction min(6 / 5, 2) = 1
        assert_eq!(verdict.score, 6);
        assert!(verdict.message.contains("6 magic numbers"));
    }
}
