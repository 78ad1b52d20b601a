//! Top-level CareerTech configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ChatConfig, GateConfig, StorageConfig};
use crate::constants::MAX_READ_POOL_SIZE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CAREERTECH_*`, plus `GROQ_API_KEY`)
/// 3. Project config (`careertech.toml` in project root)
/// 4. User config (`~/.careertech/config.toml`)
/// 5. Compiled defaults
///
/// The loaded value is passed explicitly down the call chain; there is no
/// process-wide config singleton.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CareerTechConfig {
    pub storage: StorageConfig,
    pub gate: GateConfig,
    pub chat: ChatConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<PathBuf>,
    pub chat_model: Option<String>,
    pub feature: Option<String>,
}

impl CareerTechConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("careertech.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CareerTechConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.storage.read_pool_size {
            if size == 0 || size > MAX_READ_POOL_SIZE {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: format!("must be between 1 and {MAX_READ_POOL_SIZE}"),
                });
            }
        }
        if let Some(temperature) = config.chat.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::ValidationFailed {
                    field: "chat.temperature".to_string(),
                    message: "must be between 0.0 and 2.0".to_string(),
                });
            }
        }
        if let Some(ref model) = config.chat.model {
            if model.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "chat.model".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.chat.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "chat.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        config.gate.effective_feature()?;
        Ok(())
    }

    /// Returns the user config path: `~/.careertech/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".careertech").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CareerTechConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CareerTechConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut CareerTechConfig, other: &CareerTechConfig) {
        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }

        // Gate
        if other.gate.feature.is_some() {
            base.gate.feature = other.gate.feature.clone();
        }
        if other.gate.refusal_message.is_some() {
            base.gate.refusal_message = other.gate.refusal_message.clone();
        }

        // Chat
        if other.chat.api_key.is_some() {
            base.chat.api_key = other.chat.api_key.clone();
        }
        if other.chat.base_url.is_some() {
            base.chat.base_url = other.chat.base_url.clone();
        }
        if other.chat.model.is_some() {
            base.chat.model = other.chat.model.clone();
        }
        if other.chat.temperature.is_some() {
            base.chat.temperature = other.chat.temperature;
        }
        if other.chat.timeout_secs.is_some() {
            base.chat.timeout_secs = other.chat.timeout_secs;
        }
        if other.chat.system_prompt.is_some() {
            base.chat.system_prompt = other.chat.system_prompt.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAREERTECH_DB_PATH`, `CAREERTECH_CHAT_MODEL`, etc.
    fn apply_env_overrides(config: &mut CareerTechConfig) {
        if let Ok(val) = std::env::var("CAREERTECH_DB_PATH") {
            config.storage.db_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("CAREERTECH_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAREERTECH_GATE_FEATURE") {
            config.gate.feature = Some(val);
        }
        // The hosting platform exposes the key under the provider's own name.
        if let Ok(val) = std::env::var("GROQ_API_KEY") {
            config.chat.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("CAREERTECH_CHAT_API_KEY") {
            config.chat.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("CAREERTECH_CHAT_BASE_URL") {
            config.chat.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("CAREERTECH_CHAT_MODEL") {
            config.chat.model = Some(val);
        }
        if let Ok(val) = std::env::var("CAREERTECH_CHAT_TEMPERATURE") {
            if let Ok(v) = val.parse::<f64>() {
                config.chat.temperature = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAREERTECH_CHAT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.chat.timeout_secs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CareerTechConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(ref v) = cli.chat_model {
            config.chat.model = Some(v.clone());
        }
        if let Some(ref v) = cli.feature {
            config.gate.feature = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
