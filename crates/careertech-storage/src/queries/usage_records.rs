//! Queries for the usage_records table.

use careertech_core::errors::StorageError;
use careertech_core::types::{Feature, UsageRecord, UserId};
use rusqlite::{params, Connection, OptionalExtension};

/// Raw row as stored; decoded into `UsageRecord` after integrity checks.
#[derive(Debug, Clone)]
pub struct UsageRecordRow {
    pub user_id: i64,
    pub feature: String,
    pub consumed: i64,
    pub consumed_at: Option<i64>,
}

impl UsageRecordRow {
    /// Decode, rejecting values a healthy database cannot contain.
    pub fn into_record(self) -> Result<UsageRecord, StorageError> {
        let consumed = match self.consumed {
            0 => false,
            1 => true,
            other => {
                return Err(StorageError::DbCorrupt {
                    details: format!(
                        "usage_records({}, {}).consumed = {other}",
                        self.user_id, self.feature
                    ),
                })
            }
        };
        let user_id = UserId::new(self.user_id).map_err(|_| StorageError::DbCorrupt {
            details: format!("usage_records.user_id = {}", self.user_id),
        })?;
        let feature = Feature::new(self.feature.clone()).map_err(|e| StorageError::DbCorrupt {
            details: format!("usage_records.feature = {:?}: {e}", self.feature),
        })?;
        Ok(UsageRecord {
            user_id,
            feature,
            consumed,
            consumed_at: self.consumed_at,
        })
    }
}

/// Fetch the record for `(user_id, feature)`, if any.
pub fn get_usage_record(
    conn: &Connection,
    user_id: UserId,
    feature: &Feature,
) -> Result<Option<UsageRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT user_id, feature, consumed, consumed_at
             FROM usage_records WHERE user_id = ?1 AND feature = ?2",
        )
        .map_err(crate::sqlite_err)?;

    let row = stmt
        .query_row(params![user_id.get(), feature.as_str()], |row| {
            Ok(UsageRecordRow {
                user_id: row.get(0)?,
                feature: row.get(1)?,
                consumed: row.get(2)?,
                consumed_at: row.get(3)?,
            })
        })
        .optional()
        .map_err(crate::sqlite_err)?;

    row.map(UsageRecordRow::into_record).transpose()
}

/// Upsert `consumed = 1` for `(user_id, feature)`.
///
/// `consumed_at` keeps the first timestamp. Returns `true` when this call
/// moved the record from unconsumed (or absent) to consumed. Run inside an
/// immediate transaction so the read and the upsert are one atomic step.
pub fn upsert_consumed(
    conn: &Connection,
    user_id: UserId,
    feature: &Feature,
    at: i64,
) -> Result<bool, StorageError> {
    let already: bool = conn
        .prepare_cached(
            "SELECT consumed FROM usage_records WHERE user_id = ?1 AND feature = ?2",
        )
        .map_err(crate::sqlite_err)?
        .query_row(params![user_id.get(), feature.as_str()], |row| {
            row.get::<_, i64>(0)
        })
        .optional()
        .map_err(crate::sqlite_err)?
        .is_some_and(|consumed| consumed == 1);

    conn.prepare_cached(
        "INSERT INTO usage_records (user_id, feature, consumed, consumed_at)
         VALUES (?1, ?2, 1, ?3)
         ON CONFLICT(user_id, feature) DO UPDATE SET
            consumed = 1,
            consumed_at = COALESCE(usage_records.consumed_at, excluded.consumed_at)",
    )
    .map_err(crate::sqlite_err)?
    .execute(params![user_id.get(), feature.as_str(), at])
    .map_err(crate::sqlite_err)?;

    Ok(!already)
}

/// Delete every record of a user. Returns rows removed.
pub fn delete_user_records(conn: &Connection, user_id: UserId) -> Result<usize, StorageError> {
    conn.execute(
        "DELETE FROM usage_records WHERE user_id = ?1",
        params![user_id.get()],
    )
    .map_err(crate::sqlite_err)
}

/// Count rows for a user (all features).
pub fn count_records_for_user(conn: &Connection, user_id: UserId) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM usage_records WHERE user_id = ?1",
        params![user_id.get()],
        |row| row.get(0),
    )
    .map_err(crate::sqlite_err)
}

/// Count consumed rows for a feature.
pub fn count_consumed(conn: &Connection, feature: &Feature) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM usage_records WHERE feature = ?1 AND consumed = 1",
        params![feature.as_str()],
        |row| row.get(0),
    )
    .map_err(crate::sqlite_err)
}
