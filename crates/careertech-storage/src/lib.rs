//! # careertech-storage
//!
//! SQLite persistence for usage records: a serialized writer plus a
//! round-robin read pool, `PRAGMA user_version` migrations, and the
//! queries behind the `UsageStore` trait.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod usage_store;

pub use connection::DatabaseManager;

use careertech_core::errors::StorageError;

/// Convert a rusqlite error, separating lock contention and corruption
/// from other failures.
pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(rusqlite::ErrorCode::DatabaseBusy) | Some(rusqlite::ErrorCode::DatabaseLocked) => {
            StorageError::DbBusy
        }
        Some(rusqlite::ErrorCode::DatabaseCorrupt) | Some(rusqlite::ErrorCode::NotADatabase) => {
            StorageError::DbCorrupt {
                details: e.to_string(),
            }
        }
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
