//! Output formatting for evaluation reports
//!
//! Human output reproduces the plain console layout: a banner before the call,
//! then a header and the model's critique. JSON and YAML emit a single document
//! and no banner.

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Banner + header + critique
    Human,
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
}

/// Where the reviewed question/answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    BuiltInSample,
    Files,
}

/// Everything reported about one evaluation
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub model: String,
    pub question: String,
    pub answer: String,
    pub evaluation: String,
    pub response_time_ms: u64,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Line printed before the backend call, if any
    pub fn banner(&self, source: InputSource) -> Option<String> {
        match (self.format, source) {
            (OutputFormat::Human, InputSource::BuiltInSample) => {
                Some(" Evaluating React Answer...\n".to_string())
            }
            (OutputFormat::Human, InputSource::Files) => {
                Some(" Evaluating Answer...\n".to_string())
            }
            _ => None,
        }
    }

    pub fn format(&self, report: &EvaluationReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(format!(" Final Evaluation:\n\n{}", report.evaluation)),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize evaluation report to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize evaluation report to YAML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EvaluationReport {
        EvaluationReport {
            model: "llama3.2".to_string(),
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
            evaluation: "Score:\n10/10".to_string(),
            response_time_ms: 42,
        }
    }

    #[test]
    fn test_human_output() {
        let formatter = OutputFormatter::new(OutputFormat::Human);

        assert_eq!(
            formatter.format(&report()).unwrap(),
            " Final Evaluation:\n\nScore:\n10/10"
        );
        assert_eq!(
            formatter.banner(InputSource::BuiltInSample).as_deref(),
            Some(" Evaluating React Answer...\n")
        );
        assert_eq!(
            formatter.banner(InputSource::Files).as_deref(),
            Some(" Evaluating Answer...\n")
        );
    }

    #[test]
    fn test_json_output() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["evaluation"], "Score:\n10/10");
        assert_eq!(value["response_time_ms"], 42);
        assert!(formatter.banner(InputSource::BuiltInSample).is_none());
    }

    #[test]
    fn test_yaml_output() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&report()).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["answer"], serde_yaml::Value::from("4"));
        assert!(formatter.banner(InputSource::Files).is_none());
    }
}
