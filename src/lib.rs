//! gradebox - LLM-backed review of a candidate's answer to a coding question
//!
//! A question and a candidate answer are folded into two chat messages (a fixed
//! reviewer persona and the interpolated question/answer), sent to a chat model
//! in a single non-streamed call, and the model's critique is handed back
//! untouched.
//!
//! # Example Usage
//!
//! ```no_run
//! use gradebox::evaluator::{Evaluator, DEFAULT_MODEL};
//! use gradebox::llm::{GenAIClient, DEFAULT_OLLAMA_ENDPOINT};
//! use genai::adapter::AdapterKind;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(GenAIClient::new(AdapterKind::Ollama, DEFAULT_OLLAMA_ENDPOINT, None));
//! let evaluator = Evaluator::new(client, DEFAULT_MODEL);
//!
//! let critique = evaluator.evaluate("What is 2+2?", "4").await?;
//! println!("{}", critique);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`evaluator`]: prompt construction and the single evaluation call
//! - [`llm`]: chat backend abstraction, genai implementation and test mock
//! - [`config`]: environment-driven settings
//! - [`cli`]: argument parsing, output formatting, process glue

pub mod cli;
pub mod config;
pub mod evaluator;
pub mod llm;
pub mod sample;
pub mod util;

pub use config::{ConfigError, GradeboxConfig};
pub use evaluator::{Evaluation, Evaluator, GENERAL_PROMPT};
pub use llm::{BackendError, LLMClient};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
