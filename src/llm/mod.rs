//! LLM client abstraction layer
//!
//! The evaluator only ever talks to an [`LLMClient`]. [`GenAIClient`] is the
//! production backend (a local Ollama server by default); [`MockLLMClient`]
//! stands in for it in tests.

mod client;
mod error;
mod genai;
mod mock;
mod types;

pub use client::LLMClient;
pub use error::BackendError;
pub use genai::{GenAIClient, DEFAULT_OLLAMA_ENDPOINT};
pub use mock::{MockLLMClient, MockResponse};
pub use types::{ChatMessage, LLMRequest, LLMResponse, MessageRole};
