//! Entitlement gate configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REFUSAL_MESSAGE;
use crate::errors::ConfigError;
use crate::types::Feature;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Metered feature key. Default: `ai_mentor_chat`.
    pub feature: Option<String>,
    /// Reply substituted into the conversation when access is denied.
    pub refusal_message: Option<String>,
}

impl GateConfig {
    pub fn effective_feature(&self) -> Result<Feature, ConfigError> {
        match &self.feature {
            Some(key) => Feature::new(key.clone()),
            None => Ok(Feature::ai_mentor_chat()),
        }
    }

    pub fn effective_refusal_message(&self) -> &str {
        self.refusal_message
            .as_deref()
            .unwrap_or(DEFAULT_REFUSAL_MESSAGE)
    }
}
