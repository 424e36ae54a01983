//! Evaluation engine and per-criterion analyzers

pub mod engine;
pub mod rules;

pub use engine::EvaluationEngine;
