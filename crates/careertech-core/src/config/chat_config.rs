//! Chat-completion backend configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_CHAT_TEMPERATURE,
    DEFAULT_CHAT_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// API key. When absent the backend is treated as not configured.
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL.
    pub base_url: Option<String>,
    /// Default: `llama-3.1-8b-instant`.
    pub model: Option<String>,
    /// Sampling temperature (0.0-2.0). Default: 0.7.
    pub temperature: Option<f64>,
    /// Request timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// Overrides the built-in mentor system prompt.
    pub system_prompt: Option<String>,
}

impl ChatConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_CHAT_BASE_URL)
    }

    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_CHAT_MODEL)
    }

    pub fn effective_temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_CHAT_TEMPERATURE)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_CHAT_TIMEOUT_SECS)
    }
}
