//! Backend error type
//!
//! Every failure of the chat call surfaces as a [`BackendError`]. The variants
//! only sharpen the message; callers treat them all as fatal.

use std::fmt;

/// Errors that can occur while talking to the chat backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend failed or answered with an error (unreachable, unknown model, ...)
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// Request timed out after the specified duration (in milliseconds)
    TimeoutError { millis: u64 },

    /// The backend replied but the reply carried no message content
    InvalidResponse {
        message: String,
        raw_response: Option<String>,
    },

    Other { message: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ApiError {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "API error ({}): {}", code, message)
                } else {
                    write!(f, "API error: {}", message)
                }
            }
            BackendError::TimeoutError { millis } => {
                if millis % 1000 == 0 {
                    write!(f, "Request timed out after {} seconds", millis / 1000)
                } else {
                    write!(f, "Request timed out after {} ms", millis)
                }
            }
            BackendError::InvalidResponse { message, .. } => {
                write!(f, "Invalid response from LLM: {}", message)
            }
            BackendError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for BackendError {}
