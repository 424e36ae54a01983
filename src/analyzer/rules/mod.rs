//! Per-criterion heuristic analyzers

pub mod best_practices;
pub mod correctness;
pub mod documentation;
pub mod efficiency;
pub mod readability;

pub use best_practices::BestPracticesAnalyzer;
pub use correctness::CorrectnessAnalyzer;
pub use documentation::DocumentationAnalyzer;
pub use efficiency::EfficiencyAnalyzer;
pub use readability::ReadabilityAnalyzer;

use crate::Criterion;

/// Verdict produced by a single analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Accumulated score; not clamped to 0..=10
    pub score: i32,
    /// Explanation, including any accumulated issue notes
    pub message: String,
}

impl Verdict {
    pub fn new(score: i32, message: impl Into<String>) -> Self {
        Self {
            score,
            message: message.into(),
        }
    }
}

/// Trait for per-criterion analyzers. Each analyzer is a pure function over
/// the snippet text: no state, no I/O.
pub trait CriterionAnalyzer {
    /// The criterion this analyzer scores
    fn criterion(&self) -> Criterion;

    /// Evaluate a snippet and return a score with an explanation
    fn evaluate(&self, code: &str) -> Verdict;
}

/// Look up the analyzer for a criterion. Criteria without a dedicated
/// analyzer get a neutral placeholder verdict from the engine.
pub fn analyzer_for(criterion: Criterion) -> Option<Box<dyn CriterionAnalyzer>> {
    match criterion {
        Criterion::Correctness => Some(Box::new(CorrectnessAnalyzer::new())),
        Criterion::Efficiency => Some(Box::new(EfficiencyAnalyzer::new())),
        Criterion::Readability => Some(Box::new(ReadabilityAnalyzer::new())),
        Criterion::Documentation => Some(Box::new(DocumentationAnalyzer::new())),
        Criterion::BestPractices => Some(Box::new(BestPracticesAnalyzer::new())),
        _ => None,
    }
}
