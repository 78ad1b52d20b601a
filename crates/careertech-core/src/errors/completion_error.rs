//! Chat-completion (metered action) errors.

use super::error_code::{self, ErrorCode};

/// Errors returned by a chat-completion backend.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion backend is not configured")]
    NotConfigured,

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {message}")]
    MalformedResponse { message: String },
}

impl ErrorCode for CompletionError {
    fn error_code(&self) -> &'static str {
        match self {
            CompletionError::NotConfigured => error_code::COMPLETION_NOT_CONFIGURED,
            _ => error_code::COMPLETION_ERROR,
        }
    }
}
