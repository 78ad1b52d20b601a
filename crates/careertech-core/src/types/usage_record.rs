//! Persisted per-user entitlement state.

use serde::{Deserialize, Serialize};

use super::{Feature, UserId};

/// One row per `(user_id, feature)`. Absent until the first consumption.
///
/// `consumed` only ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub user_id: UserId,
    pub feature: Feature,
    pub consumed: bool,
    /// Unix seconds of the first false→true transition.
    pub consumed_at: Option<i64>,
}

impl UsageRecord {
    pub fn is_locked(&self) -> bool {
        self.consumed
    }
}
