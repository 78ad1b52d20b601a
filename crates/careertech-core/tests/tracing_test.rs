//! Tests for the CareerTech tracing setup.

use std::sync::Mutex;

use careertech_core::tracing::init_tracing;

/// Serializes tests that touch `CAREERTECH_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn per_target_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(
        "CAREERTECH_LOG",
        "careertech_mentor=debug,careertech_storage=warn",
    );
    init_tracing();
    std::env::remove_var("CAREERTECH_LOG");
    tracing::info!(target: "careertech_mentor", "subscriber installed");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CAREERTECH_LOG", "[[[not a filter");
    init_tracing();
    std::env::remove_var("CAREERTECH_LOG");
}
