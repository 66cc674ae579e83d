use crate::cli::commands::CliArgs;
use crate::cli::output::{EvaluationReport, InputSource, OutputFormatter};
use crate::config::GradeboxConfig;
use crate::evaluator::Evaluator;
use crate::llm::{GenAIClient, LLMClient};
use crate::sample;
use anyhow::{Context, Result};
use genai::adapter::AdapterKind;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};

/// Runs one evaluation with a resolved configuration and returns the process exit code
pub async fn handle_evaluate(args: &CliArgs, config: &GradeboxConfig) -> i32 {
    debug!("{}", config);

    let client: Arc<dyn LLMClient> = Arc::new(GenAIClient::new(
        AdapterKind::Ollama,
        config.api_base_url.clone(),
        config.request_timeout(),
    ));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_evaluation(args, config, client, &mut out).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Evaluation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Loads env configuration, applies CLI overrides and validates the result
pub fn resolve_config(args: &CliArgs) -> Result<GradeboxConfig> {
    let config = GradeboxConfig::from_env().context("Failed to load configuration")?;
    let config = apply_overrides(config, args);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Applies command-line flags on top of `config`
///
/// `--log-level` beats `-v`/`-q`, which beat `GRADEBOX_LOG_LEVEL`.
pub fn apply_overrides(mut config: GradeboxConfig, args: &CliArgs) -> GradeboxConfig {
    if let Some(ref model) = args.model {
        config.model = model.clone();
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = Some(timeout);
    }

    if let Some(ref level) = args.log_level {
        config.log_level = level.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }

    config
}

/// Evaluates the selected question/answer with `client` and writes the report to `out`
pub async fn run_evaluation<W: Write>(
    args: &CliArgs,
    config: &GradeboxConfig,
    client: Arc<dyn LLMClient>,
    out: &mut W,
) -> Result<()> {
    let question = read_input(args.question_file.as_deref(), sample::QUESTION, "question")?;
    let answer = read_input(args.answer_file.as_deref(), sample::ANSWER, "answer")?;
    let source = if args.question_file.is_some() || args.answer_file.is_some() {
        InputSource::Files
    } else {
        InputSource::BuiltInSample
    };

    let formatter = OutputFormatter::new(args.format.into());
    if let Some(banner) = formatter.banner(source) {
        writeln!(out, "{}", banner)?;
        out.flush()?;
    }

    let evaluator = Evaluator::new(client, config.model.clone());
    let evaluation = evaluator
        .evaluate_with_timing(&question, &answer)
        .await
        .with_context(|| format!("Evaluation with model '{}' failed", config.model))?;

    let report = EvaluationReport {
        model: config.model.clone(),
        question,
        answer,
        evaluation: evaluation.text,
        response_time_ms: evaluation.response_time.as_millis() as u64,
    };

    writeln!(out, "{}", formatter.format(&report)?)?;
    Ok(())
}

fn read_input(path: Option<&Path>, fallback: &str, what: &str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} file {}", what, path.display())),
        None => Ok(fallback.to_string()),
    }
}
