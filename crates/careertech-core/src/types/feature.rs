//! Metered feature keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FEATURE_KEY_LEN;
use crate::errors::ConfigError;

/// Key of a metered feature. A gate is bound to exactly one feature, and
/// usage records are unique per `(user_id, feature)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Feature(String);

impl Feature {
    /// The one-time free AI mentor chat.
    pub const AI_MENTOR_CHAT: &'static str = "ai_mentor_chat";

    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() || key.len() > MAX_FEATURE_KEY_LEN {
            return Err(ConfigError::InvalidValue {
                field: "feature".to_string(),
                message: format!("must be 1..={MAX_FEATURE_KEY_LEN} bytes"),
            });
        }
        if !key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        {
            return Err(ConfigError::InvalidValue {
                field: "feature".to_string(),
                message: format!("{key:?} may only contain [a-z0-9_]"),
            });
        }
        Ok(Self(key))
    }

    pub fn ai_mentor_chat() -> Self {
        Self(Self::AI_MENTOR_CHAT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::ai_mentor_chat()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Feature {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.0
    }
}
