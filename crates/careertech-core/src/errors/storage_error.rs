//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

/// Persistence layer unreachable or inconsistent.
///
/// Callers must propagate this; it never stands in for a grant or a denial.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("database busy")]
    DbBusy,

    #[error("database corruption detected: {details}")]
    DbCorrupt { details: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::SqliteError { .. } => error_code::STORAGE_ERROR,
            StorageError::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            StorageError::DbBusy => error_code::DB_BUSY,
            StorageError::DbCorrupt { .. } => error_code::DB_CORRUPT,
        }
    }
}
