//! `UsageStore` backed by `DatabaseManager`.

use careertech_core::errors::StorageError;
use careertech_core::traits::UsageStore;
use careertech_core::types::{Feature, UsageRecord, UserId};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::usage_events::{self, UsageEventKind};
use crate::queries::usage_records;

impl UsageStore for DatabaseManager {
    fn get_record(
        &self,
        user_id: UserId,
        feature: &Feature,
    ) -> Result<Option<UsageRecord>, StorageError> {
        self.with_reader(|conn| usage_records::get_usage_record(conn, user_id, feature))
    }

    fn mark_consumed(
        &self,
        user_id: UserId,
        feature: &Feature,
        at: i64,
    ) -> Result<bool, StorageError> {
        self.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let transitioned = usage_records::upsert_consumed(tx, user_id, feature, at)?;
                if transitioned {
                    usage_events::insert_event(
                        tx,
                        user_id,
                        Some(feature),
                        UsageEventKind::Consumed,
                        at,
                    )?;
                }
                Ok(transitioned)
            })
        })
    }

    fn remove_user(&self, user_id: UserId) -> Result<usize, StorageError> {
        self.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let removed = usage_records::delete_user_records(tx, user_id)?;
                usage_events::insert_event(
                    tx,
                    user_id,
                    None,
                    UsageEventKind::UserRemoved,
                    unix_now(),
                )?;
                tracing::info!(user_id = %user_id, removed, "removed usage records");
                Ok(removed)
            })
        })
    }
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
