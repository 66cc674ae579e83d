use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Review a candidate's answer to a coding question with a local LLM
#[derive(Parser, Debug)]
#[command(
    name = "gradebox",
    about = "Review a candidate's answer to a coding question with a local LLM",
    version,
    long_about = "gradebox sends a coding question and a candidate answer to a chat model \
                  (a local Ollama server by default) and prints the reviewer's critique: \
                  evaluation, issues, suggestions and a score out of 10.\n\n\
                  With no arguments the built-in React sample is reviewed.\n\n\
                  Examples:\n  \
                  gradebox\n  \
                  gradebox --question-file task.md --answer-file App.jsx\n  \
                  gradebox --model qwen2.5-coder:7b --format json"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Read the question from a file instead of the built-in sample"
    )]
    pub question_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Read the answer from a file instead of the built-in sample"
    )]
    pub answer_file: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model name (overrides GRADEBOX_MODEL, default llama3.2)"
    )]
    pub model: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Request timeout in seconds (default: no program-level timeout)"
    )]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only errors are logged"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
