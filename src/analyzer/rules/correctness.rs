//! Syntactic correctness via a full tree-sitter parse.
//! This is the only analyzer that actually parses the snippet; everything
//! else is text pattern matching.

use super::{CriterionAnalyzer, Verdict};
use crate::parser::{check_syntax, ParseError};
use crate::Criterion;

/// Analyzer that parses the snippet and reports syntax errors
pub struct CorrectnessAnalyzer;

impl CorrectnessAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CorrectnessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for CorrectnessAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Correctness
    }

    fn evaluate(&self, code: &str) -> Verdict {
        match check_syntax(code) {
            Ok(()) => Verdict::new(10, "No syntax errors detected."),
            Err(err @ ParseError::Syntax { .. }) => Verdict::new(0, err.to_string()),
            Err(err @ ParseError::Parser(_)) => Verdict::new(2, err.to_string()),
        }
    }
}
