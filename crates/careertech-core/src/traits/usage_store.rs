use crate::errors::StorageError;
use crate::types::{Feature, UsageRecord, UserId};

/// Persistence for usage records.
///
/// Implementations must make `mark_consumed` an atomic upsert: concurrent
/// calls for the same key leave exactly one row with `consumed = true`.
pub trait UsageStore: Send + Sync {
    /// Look up the record for `(user_id, feature)`. No side effects.
    fn get_record(
        &self,
        user_id: UserId,
        feature: &Feature,
    ) -> Result<Option<UsageRecord>, StorageError>;

    /// Upsert the record with `consumed = true`, stamping `at` on first consumption.
    /// Returns `true` only when this call performed the false→true transition.
    fn mark_consumed(
        &self,
        user_id: UserId,
        feature: &Feature,
        at: i64,
    ) -> Result<bool, StorageError>;

    /// Remove every record of a user (whole-account deletion). Returns rows removed.
    fn remove_user(&self, user_id: UserId) -> Result<usize, StorageError>;
}
