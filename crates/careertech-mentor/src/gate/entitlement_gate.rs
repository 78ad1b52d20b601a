//! EntitlementGate — single authority for the one-time allowance.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use careertech_core::errors::GateResult;
use careertech_core::traits::UsageStore;
use careertech_core::types::{Feature, UserId};

use super::decision::{Decision, GateState};

/// Decides whether a user may perform the metered action for one feature,
/// and records permanent consumption.
///
/// The gate holds no per-user state of its own; everything lives in the
/// `UsageStore`. Storage failures propagate as `GateError::Storage` and are
/// never read as either a grant or a denial.
pub struct EntitlementGate<S: UsageStore + ?Sized> {
    store: Arc<S>,
    feature: Feature,
}

impl<S: UsageStore + ?Sized> EntitlementGate<S> {
    pub fn new(store: Arc<S>, feature: Feature) -> Self {
        Self { store, feature }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Current state for `user_id`. No side effects.
    pub fn state(&self, user_id: UserId) -> GateResult<GateState> {
        let record = self.store.get_record(user_id, &self.feature)?;
        Ok(match record {
            Some(record) if record.consumed => GateState::Locked,
            _ => GateState::Unmetered,
        })
    }

    /// True iff a record exists and is consumed. Absence means not locked.
    pub fn is_locked(&self, user_id: UserId) -> GateResult<bool> {
        Ok(self.state(user_id)? == GateState::Locked)
    }

    /// Ask permission for one invocation of the metered action.
    ///
    /// Does not consume anything: an unlocked user may be granted any number
    /// of times until `end_session` is called.
    pub fn try_consume(&self, user_id: UserId) -> GateResult<Decision> {
        let decision = Decision::from(self.state(user_id)?);
        tracing::debug!(
            user_id = %user_id,
            feature = %self.feature,
            ?decision,
            "gate check"
        );
        Ok(decision)
    }

    /// Permanently consume the allowance. Idempotent.
    pub fn end_session(&self, user_id: UserId) -> GateResult<()> {
        let transitioned = self
            .store
            .mark_consumed(user_id, &self.feature, unix_now())?;
        if transitioned {
            tracing::info!(user_id = %user_id, feature = %self.feature, "allowance consumed");
        } else {
            tracing::debug!(user_id = %user_id, feature = %self.feature, "allowance already consumed");
        }
        Ok(())
    }
}

impl<S: UsageStore + ?Sized> Clone for EntitlementGate<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            feature: self.feature.clone(),
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
