//! Appraise: heuristic quality scoring for Python code snippets
//!
//! This library evaluates a snippet of Python source against a set of named
//! quality criteria and produces a per-criterion score (0-10) with an
//! explanation, plus an aggregate percentage and a summary verdict. The
//! heuristics are deliberate pattern matches, not real static analysis: the
//! only true parse is the syntactic-correctness check.

pub mod analyzer;
pub mod parser;
pub mod reporter;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named quality dimension with a fixed description and a 0-10 scoring
/// contract. The enum is the criteria registry: `name()` is the registry key
/// and `description()` the canonical description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Correctness,
    Efficiency,
    Readability,
    Maintainability,
    Documentation,
    Testability,
    ErrorHandling,
    Security,
    Modularity,
    BestPractices,
}

impl Criterion {
    /// Every recognized criterion, in registry order
    pub const ALL: [Criterion; 10] = [
        Criterion::Correctness,
        Criterion::Efficiency,
        Criterion::Readability,
        Criterion::Maintainability,
        Criterion::Documentation,
        Criterion::Testability,
        Criterion::ErrorHandling,
        Criterion::Security,
        Criterion::Modularity,
        Criterion::BestPractices,
    ];

    /// Criteria evaluated when the caller specifies none
    pub const DEFAULT: [Criterion; 5] = [
        Criterion::Correctness,
        Criterion::Efficiency,
        Criterion::Readability,
        Criterion::Documentation,
        Criterion::BestPractices,
    ];

    /// Registry key for this criterion
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Correctness => "correctness",
            Criterion::Efficiency => "efficiency",
            Criterion::Readability => "readability",
            Criterion::Maintainability => "maintainability",
            Criterion::Documentation => "documentation",
            Criterion::Testability => "testability",
            Criterion::ErrorHandling => "error_handling",
            Criterion::Security => "security",
            Criterion::Modularity => "modularity",
            Criterion::BestPractices => "best_practices",
        }
    }

    /// Human-readable description from the criteria registry
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::Correctness => "Code is free from syntax errors and logical bugs.",
            Criterion::Efficiency => "Code uses efficient algorithms and data structures.",
            Criterion::Readability => "Code is easy to read and understand.",
            Criterion::Maintainability => "Code is easy to maintain and extend.",
            Criterion::Documentation => "Code is well-documented with clear explanations.",
            Criterion::Testability => "Code is designed to be easily testable.",
            Criterion::ErrorHandling => "Code handles errors and edge cases appropriately.",
            Criterion::Security => "Code is secure and protects against common vulnerabilities.",
            Criterion::Modularity => "Code is organized into reusable, well-defined modules.",
            Criterion::BestPractices => "Code follows language-specific best practices.",
        }
    }

    /// Look up a criterion by registry name. Unknown names yield `None` and
    /// are silently dropped before evaluation.
    pub fn parse(name: &str) -> Option<Self> {
        Criterion::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result for a single evaluated criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Accumulated score. Deltas are applied additively and the final value
    /// is intentionally not clamped to 0..=10, so extreme inputs can push it
    /// outside that range. Only the message tiers are bucketed.
    pub score: i32,
    /// Always 10
    pub max_score: u32,
    /// Explanation of the score, including any accumulated issue notes
    pub message: String,
}

impl CriterionResult {
    pub fn new(score: i32, message: impl Into<String>) -> Self {
        Self {
            score,
            max_score: 10,
            message: message.into(),
        }
    }
}

/// The full evaluation report returned for one snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Sum of all criterion scores
    pub total_score: i32,
    /// 10 points per requested valid criterion
    pub max_score: u32,
    /// Aggregate percentage; 0 when nothing was evaluated. During a syntax
    /// short-circuit the denominator counts only the correctness points,
    /// while `max_score` still counts every requested criterion.
    pub percentage: f64,
    /// Per-criterion results in evaluation order
    pub criteria_results: IndexMap<String, CriterionResult>,
    /// One-line verdict for the whole snippet
    pub summary: String,
}

/// Summary band for an aggregate percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    High,
    Solid,
    NeedsImprovement,
    Poor,
}

impl QualityTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            QualityTier::High
        } else if percentage >= 60.0 {
            QualityTier::Solid
        } else if percentage >= 40.0 {
            QualityTier::NeedsImprovement
        } else {
            QualityTier::Poor
        }
    }

    /// Verdict text used as the report summary
    pub fn summary(&self) -> &'static str {
        match self {
            QualityTier::High => "High-quality code that follows good practices in most areas.",
            QualityTier::Solid => "Solid code with some areas for improvement.",
            QualityTier::NeedsImprovement => "Code needs improvement in several key areas.",
            QualityTier::Poor => "Code has significant issues that should be addressed.",
        }
    }
}

/// Parameter bag accepted by [`run`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalRequest {
    /// The snippet to evaluate (required, non-empty)
    #[serde(default)]
    pub code: String,
    /// Criteria names to evaluate; defaults to [`Criterion::DEFAULT`]
    #[serde(default)]
    pub criteria: Option<Vec<String>>,
}

/// Outer envelope returned by [`run`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunResult {
    Success { evaluation: EvaluationReport },
    Failed { error: String },
}

/// Public API: evaluate a snippet from a parameter bag. Missing or empty
/// code fails terminally; no analyzers are invoked.
pub fn run(request: &EvalRequest) -> RunResult {
    if request.code.is_empty() {
        return RunResult::Failed {
            error: "Missing code parameter".to_string(),
        };
    }

    let engine = analyzer::EvaluationEngine::new();
    RunResult::Success {
        evaluation: engine.evaluate(&request.code, request.criteria.as_deref()),
    }
}
