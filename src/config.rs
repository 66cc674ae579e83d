//! Configuration management for gradebox
//!
//! Settings come from environment variables; anything unset falls back to the
//! defaults below, which reproduce a plain local run against Ollama.
//!
//! # Environment Variables
//!
//! - `GRADEBOX_MODEL`: model identifier - default: "llama3.2"
//! - `GRADEBOX_API_BASE_URL`: Ollama endpoint - default: "http://localhost:11434/v1/"
//! - `GRADEBOX_REQUEST_TIMEOUT`: timeout in seconds - default: unset (client default)
//! - `GRADEBOX_LOG_LEVEL`: logging level - default: "warn"
//! - `GRADEBOX_LOG_JSON`: `true` for JSON log lines - default: false
//!
//! The resolved configuration is the only source for the log level; see
//! [`GradeboxConfig::logging_config`].

use crate::evaluator::DEFAULT_MODEL;
use crate::llm::DEFAULT_OLLAMA_ENDPOINT;
use crate::util::logging::{parse_level, LoggingConfig};
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_LEVEL: &str = "warn";
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeboxConfig {
    /// Model name sent with every request
    pub model: String,

    /// Ollama endpoint every request is sent to
    pub api_base_url: String,

    /// Request timeout in seconds; `None` keeps the client default
    pub request_timeout_secs: Option<u64>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON log lines
    pub log_json: bool,
}

impl Default for GradeboxConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_OLLAMA_ENDPOINT.to_string(),
            request_timeout_secs: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl GradeboxConfig {
    /// Loads configuration from `GRADEBOX_*` environment variables
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model = non_empty_var("GRADEBOX_MODEL").unwrap_or(defaults.model);
        let api_base_url = non_empty_var("GRADEBOX_API_BASE_URL").unwrap_or(defaults.api_base_url);

        let request_timeout_secs = match non_empty_var("GRADEBOX_REQUEST_TIMEOUT") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| ConfigError::ParseError {
                field: "GRADEBOX_REQUEST_TIMEOUT".to_string(),
                error: e.to_string(),
            })?),
            None => None,
        };

        let log_level = non_empty_var("GRADEBOX_LOG_LEVEL")
            .map(|l| l.to_lowercase())
            .unwrap_or(defaults.log_level);

        let log_json = match non_empty_var("GRADEBOX_LOG_JSON") {
            Some(raw) => raw.trim().to_lowercase().parse::<bool>().map_err(|e| {
                ConfigError::ParseError {
                    field: "GRADEBOX_LOG_JSON".to_string(),
                    error: e.to_string(),
                }
            })?,
            None => defaults.log_json,
        };

        Ok(Self {
            model,
            api_base_url,
            request_timeout_secs,
            log_level,
            log_json,
        })
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for an empty model, a timeout
    /// outside 1..=600 seconds, or an unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model name must not be empty".to_string(),
            ));
        }

        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout must be at least 1 second".to_string(),
                ));
            }
            if secs > MAX_REQUEST_TIMEOUT_SECS {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout cannot exceed 10 minutes".to_string(),
                ));
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Logging setup derived from this configuration
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            use_json: self.log_json,
            ..LoggingConfig::with_level(parse_level(&self.log_level).unwrap_or(Level::WARN))
        }
    }
}

impl fmt::Display for GradeboxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gradebox Configuration:")?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  API Base URL: {}", self.api_base_url)?;
        match self.request_timeout_secs {
            Some(secs) => writeln!(f, "  Request Timeout: {}s", secs)?,
            None => writeln!(f, "  Request Timeout: client default")?,
        }
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
