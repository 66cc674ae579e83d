pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, OutputFormatArg};
pub use handlers::{apply_overrides, handle_evaluate, resolve_config, run_evaluation};
pub use output::{EvaluationReport, InputSource, OutputFormat, OutputFormatter};
