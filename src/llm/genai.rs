//! GenAI-based LLM client implementation
//!
//! Talks to the chat backend through the `genai` crate. Every request is pinned
//! to the configured adapter and endpoint, so a model name such as
//! `deepseek-r1:7b` or `gpt-oss:20b` still goes to the local Ollama server
//! instead of whichever cloud provider genai would infer from the name.

use super::client::LLMClient;
use super::error::BackendError;
use super::types::{ChatMessage, LLMRequest, LLMResponse, MessageRole};
use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{ChatMessage as GenAIChatMessage, ChatRequest as GenAIChatRequest};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ModelName, ServiceTarget};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// OpenAI-compatible root of a local Ollama server
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434/v1/";

/// GenAI-based chat client
///
/// The model is not fixed here; each [`LLMRequest`] names its own.
pub struct GenAIClient {
    client: Client,
    provider: AdapterKind,
    endpoint: String,
    /// `None` leaves timing entirely to the HTTP stack
    timeout: Option<Duration>,
}

impl GenAIClient {
    /// Creates a new GenAI client
    ///
    /// # Arguments
    ///
    /// * `provider` - Adapter every request is routed through
    /// * `endpoint` - Base URL; for Ollama this is the OpenAI-compatible root,
    ///   e.g. [`DEFAULT_OLLAMA_ENDPOINT`]
    /// * `timeout` - Optional upper bound on a single chat call
    pub fn new(provider: AdapterKind, endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let endpoint = endpoint.into();
        debug!("Routing {} requests to {}", provider.as_str(), endpoint);

        let endpoint_url = endpoint.clone();
        let resolver = ServiceTargetResolver::from_resolver_fn(
            move |service_target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                Ok(pin_target(
                    provider,
                    &endpoint_url,
                    service_target.model.model_name,
                ))
            },
        );

        let client = Client::builder()
            .with_service_target_resolver(resolver)
            .build();

        Self {
            client,
            provider,
            endpoint,
            timeout,
        }
    }

    /// Converts our ChatMessage to genai ChatMessage
    fn convert_message(msg: &ChatMessage) -> GenAIChatMessage {
        match msg.role {
            MessageRole::System => GenAIChatMessage::system(&msg.content),
            MessageRole::User => GenAIChatMessage::user(&msg.content),
        }
    }
}

/// Service target for `model_name` on `provider` at `endpoint`, whatever adapter
/// genai guessed from the name.
fn pin_target(provider: AdapterKind, endpoint: &str, model_name: ModelName) -> ServiceTarget {
    let auth = match provider.default_key_env_name() {
        Some(api_key_var) => AuthData::from_env(api_key_var),
        None => AuthData::from_single(""),
    };

    ServiceTarget {
        endpoint: Endpoint::from_owned(endpoint.to_string()),
        auth,
        model: ModelIden::new(provider, model_name),
    }
}

#[async_trait]
impl LLMClient for GenAIClient {
    async fn chat(&self, request: LLMRequest) -> Result<LLMResponse, BackendError> {
        let start = Instant::now();

        let messages: Vec<GenAIChatMessage> =
            request.messages.iter().map(Self::convert_message).collect();
        let genai_request = GenAIChatRequest::new(messages);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat request to {}",
            self.provider.as_str()
        );

        let call = self.client.exec_chat(&request.model, genai_request, None);

        let result = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, call).await {
                Ok(result) => result,
                Err(_) => {
                    let err = BackendError::TimeoutError {
                        millis: timeout.as_millis() as u64,
                    };
                    error!("{} {}", self.provider.as_str(), err);
                    return Err(err);
                }
            },
            None => call.await,
        };

        let response = result.map_err(|e| {
            error!("{} API error: {}", self.provider.as_str(), e);
            BackendError::ApiError {
                message: format!("{} request failed: {}", self.provider.as_str(), e),
                status_code: None,
            }
        })?;

        let content = response
            .first_text()
            .ok_or_else(|| BackendError::InvalidResponse {
                message: format!("{} reply has no message content", self.provider.as_str()),
                raw_response: None,
            })?
            .to_string();

        Ok(LLMResponse::text(content, start.elapsed()))
    }

    fn name(&self) -> &str {
        self.provider.as_str()
    }

    fn endpoint_info(&self) -> Option<String> {
        Some(self.endpoint.clone())
    }
}

impl std::fmt::Debug for GenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAIClient")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
