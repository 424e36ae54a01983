//! Evaluation engine - orchestrates the per-criterion analyzers

use indexmap::IndexMap;

use super::rules::{analyzer_for, CorrectnessAnalyzer, CriterionAnalyzer, Verdict};
use crate::{Criterion, CriterionResult, EvaluationReport, QualityTier};

/// Correctness scores below this gate suppress the remaining analyzers
const SYNTAX_GATE: i32 = 3;

const NOT_EVALUATED: &str = "Not evaluated due to syntax errors";
const SYNTAX_SUMMARY: &str =
    "Code has syntax errors that need to be fixed before other aspects can be evaluated.";

/// Stateless engine that dispatches criteria to their analyzers and
/// assembles the final report. Every call is an independent, pure
/// computation over the snippet text.
pub struct EvaluationEngine;

impl EvaluationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a snippet against the requested criteria (or the default
    /// set when none are given)
    pub fn evaluate(&self, code: &str, criteria: Option<&[String]>) -> EvaluationReport {
        let selected = select_criteria(criteria);

        let mut results: IndexMap<String, CriterionResult> = IndexMap::new();
        let mut total_score: i32 = 0;
        let mut max_possible: u32 = 0;

        // Correctness always runs first; a broken parse gates everything else
        if selected.contains(&Criterion::Correctness) {
            let verdict = CorrectnessAnalyzer::new().evaluate(code);
            total_score += verdict.score;
            max_possible += 10;
            let gated = verdict.score < SYNTAX_GATE;
            results.insert(
                Criterion::Correctness.name().to_string(),
                CriterionResult::new(verdict.score, verdict.message),
            );

            if gated {
                for criterion in &selected {
                    if !results.contains_key(criterion.name()) {
                        results.insert(
                            criterion.name().to_string(),
                            CriterionResult::new(0, NOT_EVALUATED),
                        );
                    }
                }
                // The reported max counts every requested criterion, while
                // the percentage denominator counts only the correctness
                // points actually evaluated.
                return EvaluationReport {
                    total_score,
                    max_score: selected.len() as u32 * 10,
                    percentage: percentage(total_score, max_possible),
                    criteria_results: results,
                    summary: SYNTAX_SUMMARY.to_string(),
                };
            }
        }

        for criterion in &selected {
            if results.contains_key(criterion.name()) {
                continue;
            }
            let verdict = match analyzer_for(*criterion) {
                Some(analyzer) => analyzer.evaluate(code),
                None => Verdict::new(
                    5,
                    format!(
                        "Basic {} check - detailed evaluation not implemented yet.",
                        criterion
                    ),
                ),
            };
            total_score += verdict.score;
            max_possible += 10;
            results.insert(
                criterion.name().to_string(),
                CriterionResult::new(verdict.score, verdict.message),
            );
        }

        let percentage = percentage(total_score, max_possible);
        EvaluationReport {
            total_score,
            max_score: max_possible,
            percentage,
            criteria_results: results,
            summary: QualityTier::from_percentage(percentage).summary().to_string(),
        }
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize the requested criteria: substitute the default set when empty
/// or absent, drop unknown names, and dedupe by first occurrence while
/// preserving order.
fn select_criteria(criteria: Option<&[String]>) -> Vec<Criterion> {
    let mut selected = Vec::new();
    match criteria {
        Some(names) if !names.is_empty() => {
            for name in names {
                if let Some(criterion) = Criterion::parse(name) {
                    if !selected.contains(&criterion) {
                        selected.push(criterion);
                    }
                }
            }
        }
        _ => selected.extend(Criterion::DEFAULT),
    }
    selected
}

fn percentage(total: i32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        total as f64 / max as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SNIPPET: &str = "def add(a, b):\n    return a + b\n";
    const BROKEN_SNIPPET: &str = "def f(:\n    pass\n";

    fn names(criteria: &[&str]) -> Vec<String> {
        criteria.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_criteria_in_order() {
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, None);
        let keys: Vec<&str> = report.criteria_results.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "correctness",
                "efficiency",
                "readability",
                "documentation",
                "best_practices"
            ]
        );
        assert_eq!(report.max_score, 50);
    }

    #[test]
    fn empty_criteria_list_uses_default() {
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&[]));
        assert_eq!(report.criteria_results.len(), 5);
        assert_eq!(report.max_score, 50);
    }

    #[test]
    fn correctness_runs_first_regardless_of_position() {
        let criteria = names(&["readability", "correctness"]);
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&criteria));
        let keys: Vec<&str> = report.criteria_results.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["correctness", "readability"]);
    }

    #[test]
    fn unknown_criteria_are_dropped() {
        let criteria = names(&["correctness", "elegance"]);
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&criteria));
        assert_eq!(report.criteria_results.len(), 1);
        assert_eq!(report.max_score, 10);
    }

    #[test]
    fn duplicate_criteria_evaluated_once() {
        let criteria = names(&["readability", "readability"]);
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&criteria));
        assert_eq!(report.criteria_results.len(), 1);
        assert_eq!(report.max_score, 10);
    }

    #[test]
    fn placeholder_for_unimplemented_criterion() {
        let criteria = names(&["correctness", "security"]);
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&criteria));
        let result = &report.criteria_results["security"];
        assert_eq!(result.score, 5);
        assert_eq!(
            result.message,
            "Basic security check - detailed evaluation not implemented yet."
        );
    }

    #[test]
    fn syntax_short_circuit_stamps_placeholders() {
        let report = EvaluationEngine::new().evaluate(BROKEN_SNIPPET, None);
        assert_eq!(report.criteria_results["correctness"].score, 0);
        for (name, result) in report.criteria_results.iter().skip(1) {
            assert_eq!(result.score, 0, "{} should not be evaluated", name);
            assert_eq!(result.message, NOT_EVALUATED);
        }
        assert_eq!(report.summary, SYNTAX_SUMMARY);
    }

    #[test]
    fn syntax_short_circuit_denominator_asymmetry() {
        // max_score counts all five requested criteria, but the percentage
        // is computed against the 10 correctness points alone.
        let report = EvaluationEngine::new().evaluate(BROKEN_SNIPPET, None);
        assert_eq!(report.max_score, 50);
        assert_eq!(report.total_score, 0);
        assert_eq!(report.percentage, percentage(report.total_score, 10));
    }

    #[test]
    fn short_circuit_without_correctness_does_not_apply() {
        // Syntax gating only exists when correctness is requested
        let criteria = names(&["readability"]);
        let report = EvaluationEngine::new().evaluate(BROKEN_SNIPPET, Some(&criteria));
        assert_ne!(report.criteria_results["readability"].message, NOT_EVALUATED);
    }

    #[test]
    fn percentage_zero_when_nothing_evaluated() {
        let criteria = names(&["elegance"]);
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, Some(&criteria));
        assert_eq!(report.max_score, 0);
        assert_eq!(report.percentage, 0.0);
        assert!(report.criteria_results.is_empty());
    }

    #[test]
    fn summary_matches_percentage_tier() {
        let report = EvaluationEngine::new().evaluate(VALID_SNIPPET, None);
        assert_eq!(
            report.summary,
            QualityTier::from_percentage(report.percentage).summary()
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let engine = EvaluationEngine::new();
        let a = engine.evaluate(VALID_SNIPPET, None);
        let b = engine.evaluate(VALID_SNIPPET, None);
        assert_eq!(a, b);
    }
}
