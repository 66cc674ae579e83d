//! Answer evaluation
//!
//! An [`Evaluator`] turns a question and a candidate answer into exactly one
//! chat request and hands back whatever text the model produced.

pub mod prompt;

pub use prompt::{build_messages, build_user_prompt, GENERAL_PROMPT};

use crate::llm::{BackendError, LLMClient, LLMRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default model served by the local backend
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Outcome of a timed evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Model reply, untouched
    pub text: String,
    pub response_time: Duration,
}

pub struct Evaluator {
    client: Arc<dyn LLMClient>,
    model: String,
}

impl Evaluator {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Reviews `answer` against `question` and returns the model's critique verbatim.
    ///
    /// Backend failures are returned as-is; there is no retry.
    pub async fn evaluate(&self, question: &str, answer: &str) -> Result<String, BackendError> {
        self.evaluate_with_timing(question, answer)
            .await
            .map(|evaluation| evaluation.text)
    }

    /// Same single call as [`Evaluator::evaluate`], keeping the backend timing.
    pub async fn evaluate_with_timing(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<Evaluation, BackendError> {
        let request = LLMRequest::new(self.model.clone(), build_messages(question, answer));

        debug!(
            question_len = question.len(),
            answer_len = answer.len(),
            "Built review request"
        );
        match self.client.endpoint_info() {
            Some(endpoint) => info!(
                "Evaluating answer with {} ({} at {})",
                self.model,
                self.client.name(),
                endpoint
            ),
            None => info!("Evaluating answer with {} ({})", self.model, self.client.name()),
        }

        let response = self.client.chat(request).await?;

        debug!(
            elapsed_ms = response.response_time.as_millis() as u64,
            "Received evaluation"
        );

        Ok(Evaluation {
            text: response.content,
            response_time: response.response_time,
        })
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("client", &self.client.name())
            .field("model", &self.model)
            .finish()
    }
}
