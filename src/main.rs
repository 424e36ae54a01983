//! Appraise: heuristic Python snippet quality scorer CLI

use anyhow::{Context, Result};
use appraise::reporter::{ConsoleReporter, JsonReporter};
use appraise::{run, EvalRequest, RunResult};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Heuristic quality scorer for Python code snippets
#[derive(Parser, Debug)]
#[command(name = "appraise")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Python file to evaluate (reads stdin when omitted)
    path: Option<PathBuf>,

    /// Output the full report as JSON
    #[arg(long, short)]
    json: bool,

    /// Comma-separated criteria to evaluate (default: correctness,
    /// efficiency, readability, documentation, best_practices)
    #[arg(long, short, value_delimiter = ',')]
    criteria: Option<Vec<String>>,

    /// Minimum percentage threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (just the aggregate score)
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run_cli() -> Result<ExitCode> {
    let args = Args::parse();

    let code = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let request = EvalRequest {
        code,
        criteria: args.criteria.clone(),
    };
    let result = run(&request);

    let evaluation = match &result {
        RunResult::Success { evaluation } => evaluation,
        RunResult::Failed { error } => {
            if args.json {
                println!("{}", JsonReporter::new().render(&result)?);
                return Ok(ExitCode::from(2));
            }
            anyhow::bail!("{}", error);
        }
    };

    if args.json {
        println!("{}", JsonReporter::new().render(&result)?);
    } else {
        let reporter = if args.no_color {
            ConsoleReporter::new().without_colors()
        } else {
            ConsoleReporter::new()
        };
        if args.quiet {
            reporter.report_quiet(evaluation);
        } else {
            reporter.report(evaluation);
        }
    }

    if let Some(threshold) = args.threshold {
        if evaluation.percentage < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "Score {:.1}% is below threshold {:.1}%",
                    evaluation.percentage, threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}
