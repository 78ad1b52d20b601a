//! Write connection utilities — BEGIN IMMEDIATE transactions.

use careertech_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
///
/// The write lock is taken at transaction start, so a read-then-upsert inside
/// `f` cannot interleave with another writer, including writers in other
/// processes sharing the same file. The transaction rolls back if `f` fails.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    // `new_unchecked` takes `&Connection`; the writer mutex already guarantees
    // exclusive use of this connection.
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        match crate::sqlite_err(e) {
            StorageError::SqliteError { message } => StorageError::SqliteError {
                message: format!("failed to begin immediate transaction: {message}"),
            },
            other => other,
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}
