//! # careertech-core
//!
//! Foundation crate for the CareerTech entitlement gate.
//! Defines the shared types, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CareerTechConfig;
pub use errors::{CompletionError, ConfigError, GateError, StorageError};
pub use traits::{ChatCompletion, UsageStore};
pub use types::{ChatMessage, Feature, Role, UsageRecord, UserId};
