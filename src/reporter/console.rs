//! Console reporter with colored output

use crate::EvaluationReport;
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Report a full evaluation
    pub fn report(&self, report: &EvaluationReport) {
        println!();
        println!("{}", "Code Quality Evaluation".bold());
        println!("{}", "─".repeat(48));

        for (name, result) in &report.criteria_results {
            println!(
                "{:<16} {}",
                name,
                self.score_cell(result.score, result.max_score)
            );
            for line in result.message.lines() {
                println!("    {}", line.dimmed());
            }
        }

        println!("{}", "─".repeat(48));
        println!(
            "{} {}/{} ({:.1}%)",
            "Total:".bold(),
            report.total_score,
            report.max_score,
            report.percentage
        );
        println!("{}", report.summary);
        println!();
    }

    /// Report in quiet mode (just the aggregate)
    pub fn report_quiet(&self, report: &EvaluationReport) {
        println!(
            "{}/{} ({:.1}%)",
            report.total_score, report.max_score, report.percentage
        );
    }

    fn score_cell(&self, score: i32, max_score: u32) -> String {
        let text = format!("{}/{}", score, max_score);
        if !self.use_colors {
            return text;
        }
        if score >= 8 {
            text.green().to_string()
        } else if score >= 5 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
