//! Authenticated user identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GateError;

/// Stable identifier supplied by the identity provider.
///
/// Always positive. Construction is the only validation point, so a `UserId`
/// that reaches the gate or the store is well-formed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    pub fn new(raw: i64) -> Result<Self, GateError> {
        if raw <= 0 {
            return Err(GateError::invalid_user(format!(
                "user id must be positive, got {raw}"
            )));
        }
        Ok(Self(raw))
    }

    /// Parse an identifier taken from a session cookie or form field.
    pub fn parse(raw: &str) -> Result<Self, GateError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GateError::invalid_user("user id is missing"));
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| GateError::invalid_user(format!("user id is not numeric: {trimmed:?}")))?;
        Self::new(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for UserId {
    type Error = GateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
