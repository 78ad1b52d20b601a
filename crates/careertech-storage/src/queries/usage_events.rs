//! Queries for the usage_events append-only audit log.

use careertech_core::errors::StorageError;
use careertech_core::types::{Feature, UserId};
use rusqlite::{params, Connection};

/// Kind of a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageEventKind {
    Consumed,
    UserRemoved,
}

impl UsageEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UsageEventKind::Consumed => "consumed",
            UsageEventKind::UserRemoved => "user_removed",
        }
    }

    fn parse(raw: &str) -> Result<Self, StorageError> {
        match raw {
            "consumed" => Ok(UsageEventKind::Consumed),
            "user_removed" => Ok(UsageEventKind::UserRemoved),
            other => Err(StorageError::DbCorrupt {
                details: format!("usage_events.event = {other:?}"),
            }),
        }
    }
}

/// A usage event record.
#[derive(Debug, Clone)]
pub struct UsageEventRow {
    pub id: i64,
    pub user_id: i64,
    pub feature: Option<String>,
    pub event: UsageEventKind,
    pub recorded_at: i64,
}

/// Append an event. Returns the row id.
pub fn insert_event(
    conn: &Connection,
    user_id: UserId,
    feature: Option<&Feature>,
    event: UsageEventKind,
    recorded_at: i64,
) -> Result<i64, StorageError> {
    conn.prepare_cached(
        "INSERT INTO usage_events (user_id, feature, event, recorded_at)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .map_err(crate::sqlite_err)?
    .execute(params![
        user_id.get(),
        feature.map(Feature::as_str),
        event.as_str(),
        recorded_at
    ])
    .map_err(crate::sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// All events for a user, oldest first.
pub fn query_events_for_user(
    conn: &Connection,
    user_id: UserId,
) -> Result<Vec<UsageEventRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, feature, event, recorded_at
             FROM usage_events WHERE user_id = ?1 ORDER BY id ASC",
        )
        .map_err(crate::sqlite_err)?;

    let rows = stmt
        .query_map(params![user_id.get()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })
        .map_err(crate::sqlite_err)?;

    let mut events = Vec::new();
    for row in rows {
        let (id, user_id, feature, event, recorded_at) = row.map_err(crate::sqlite_err)?;
        events.push(UsageEventRow {
            id,
            user_id,
            feature,
            event: UsageEventKind::parse(&event)?,
            recorded_at,
        });
    }
    Ok(events)
}
