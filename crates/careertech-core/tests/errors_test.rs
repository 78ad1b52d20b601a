//! Tests for the CareerTech error handling system.

use std::collections::HashSet;

use careertech_core::errors::error_code::ErrorCode;
use careertech_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let storage = StorageError::DbBusy;
    assert!(!storage.error_code().is_empty());

    let gate = GateError::invalid_user("missing");
    assert!(!gate.error_code().is_empty());

    let completion = CompletionError::NotConfigured;
    assert!(!completion.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert!(!config.error_code().is_empty());
}

#[test]
fn test_storage_error_converts_into_gate_error() {
    let storage = StorageError::SqliteError {
        message: "disk I/O error".into(),
    };
    let gate: GateError = storage.into();
    assert!(matches!(
        gate,
        GateError::Storage(StorageError::SqliteError { .. })
    ));
}

#[test]
fn test_gate_error_keeps_storage_code() {
    let gate = GateError::from(StorageError::DbCorrupt {
        details: "consumed = 7".into(),
    });
    assert_eq!(gate.error_code(), error_code::DB_CORRUPT);
    assert_ne!(gate.error_code(), error_code::INVALID_USER);
}

#[test]
fn test_coded_string_format() {
    let err = GateError::invalid_user("user id is missing");
    assert_eq!(
        err.coded_string(),
        "[INVALID_USER] invalid user: user id is missing"
    );
}

#[test]
fn test_storage_codes_are_distinct() {
    let codes: HashSet<&str> = [
        StorageError::SqliteError {
            message: String::new(),
        }
        .error_code(),
        StorageError::MigrationFailed {
            version: 1,
            message: String::new(),
        }
        .error_code(),
        StorageError::DbBusy.error_code(),
        StorageError::DbCorrupt {
            details: String::new(),
        }
        .error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn test_completion_error_display() {
    let err = CompletionError::Api {
        status: 429,
        body: "rate limited".into(),
    };
    assert_eq!(err.to_string(), "API returned 429: rate limited");
    assert_eq!(err.error_code(), error_code::COMPLETION_ERROR);
}
