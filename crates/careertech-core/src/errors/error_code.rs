//! ErrorCode trait for structured error reporting at the web boundary.

/// Every error enum implements this to provide a stable code string
/// the host application can log or map to a user-facing message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const DB_CORRUPT: &str = "DB_CORRUPT";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const INVALID_USER: &str = "INVALID_USER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const COMPLETION_NOT_CONFIGURED: &str = "COMPLETION_NOT_CONFIGURED";
pub const COMPLETION_ERROR: &str = "COMPLETION_ERROR";
