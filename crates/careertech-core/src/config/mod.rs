//! Configuration system for CareerTech.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod careertech_config;
pub mod chat_config;
pub mod gate_config;
pub mod storage_config;

pub use careertech_config::{CareerTechConfig, CliOverrides};
pub use chat_config::ChatConfig;
pub use gate_config::GateConfig;
pub use storage_config::StorageConfig;
