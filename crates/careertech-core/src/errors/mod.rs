//! Error handling for CareerTech.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod completion_error;
pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod storage_error;

pub use completion_error::CompletionError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use gate_error::{GateError, GateResult};
pub use storage_error::StorageError;
