//! JSON reporter for programmatic consumers

use crate::RunResult;
use anyhow::Result;

/// Reporter that renders the result envelope as JSON
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Render single-line JSON instead of pretty-printed
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn render(&self, result: &RunResult) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(rendered)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{run, EvalRequest};

    #[test]
    fn renders_valid_json() {
        let request = EvalRequest {
            code: "x = 1\n".to_string(),
            criteria: None,
        };
        let result = run(&request);
        let rendered = JsonReporter::new().render(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn compact_output_is_single_line() {
        let result = run(&EvalRequest {
            code: "x = 1\n".to_string(),
            criteria: None,
        });
        let rendered = JsonReporter::new().compact().render(&result).unwrap();
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn criteria_results_preserve_evaluation_order() {
        let result = run(&EvalRequest {
            code: "x = 1\n".to_string(),
            criteria: None,
        });
        let rendered = JsonReporter::new().compact().render(&result).unwrap();
        let correctness = rendered.find("\"correctness\"").unwrap();
        let efficiency = rendered.find("\"efficiency\"").unwrap();
        let best_practices = rendered.find("\"best_practices\"").unwrap();
        assert!(correctness < efficiency && efficiency < best_practices);
    }
}
