//! Entitlement gate errors.

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors surfaced by the entitlement gate.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Identifier missing or malformed. Raised before storage is consulted.
    #[error("invalid user: {reason}")]
    InvalidUser { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type GateResult<T> = Result<T, GateError>;

impl GateError {
    pub fn invalid_user(reason: impl Into<String>) -> Self {
        GateError::InvalidUser {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        match self {
            GateError::InvalidUser { .. } => error_code::INVALID_USER,
            GateError::Storage(e) => e.error_code(),
        }
    }
}
