//! Gate outcomes.

use serde::{Deserialize, Serialize};

/// Answer to "may this user perform the metered action now?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    pub fn is_granted(self) -> bool {
        matches!(self, Decision::Granted)
    }
}

/// Per-user gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// No record, or a record with `consumed = false`. Never-used and
    /// in-use are deliberately the same state.
    Unmetered,
    /// Allowance consumed. Terminal.
    Locked,
}

impl From<GateState> for Decision {
    fn from(state: GateState) -> Self {
        match state {
            GateState::Unmetered => Decision::Granted,
            GateState::Locked => Decision::Denied,
        }
    }
}
