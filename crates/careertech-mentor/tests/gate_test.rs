//! Entitlement gate behavior against the SQLite usage store.

use std::sync::{Arc, Barrier};
use std::thread;

use careertech_core::errors::{GateError, StorageError};
use careertech_core::traits::UsageStore;
use careertech_core::types::{Feature, UsageRecord, UserId};
use careertech_mentor::{Decision, EntitlementGate, GateState};
use careertech_storage::queries::usage_records;
use careertech_storage::DatabaseManager;
use tempfile::TempDir;

fn uid(raw: i64) -> UserId {
    UserId::new(raw).unwrap()
}

fn memory_gate() -> EntitlementGate<DatabaseManager> {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    EntitlementGate::new(db, Feature::ai_mentor_chat())
}

/// A store whose backend is unreachable.
struct UnreachableStore;

impl UsageStore for UnreachableStore {
    fn get_record(&self, _: UserId, _: &Feature) -> Result<Option<UsageRecord>, StorageError> {
        Err(StorageError::SqliteError {
            message: "unable to open database file".to_string(),
        })
    }

    fn mark_consumed(&self, _: UserId, _: &Feature, _: i64) -> Result<bool, StorageError> {
        Err(StorageError::DbBusy)
    }

    fn remove_user(&self, _: UserId) -> Result<usize, StorageError> {
        Err(StorageError::DbBusy)
    }
}

// ---- fresh users ----

#[test]
fn fresh_user_is_not_locked() {
    let gate = memory_gate();
    for raw in [1, 2, 999, i64::MAX] {
        assert!(!gate.is_locked(uid(raw)).unwrap());
        assert_eq!(gate.state(uid(raw)).unwrap(), GateState::Unmetered);
    }
}

#[test]
fn checks_do_not_create_records() {
    let gate = memory_gate();
    gate.is_locked(uid(1)).unwrap();
    gate.try_consume(uid(1)).unwrap();

    let rows = gate
        .store()
        .with_reader(|conn| usage_records::count_records_for_user(conn, uid(1)))
        .unwrap();
    assert_eq!(rows, 0, "records are created on consumption, not on read");
}

// ---- locking ----

#[test]
fn end_session_locks_and_stays_locked() {
    let gate = memory_gate();
    gate.end_session(uid(2)).unwrap();

    for _ in 0..10 {
        assert!(gate.is_locked(uid(2)).unwrap());
        assert_eq!(gate.try_consume(uid(2)).unwrap(), Decision::Denied);
        assert_eq!(gate.state(uid(2)).unwrap(), GateState::Locked);
    }
}

#[test]
fn end_session_is_idempotent() {
    let gate = memory_gate();
    gate.end_session(uid(3)).unwrap();
    let once = gate
        .store()
        .get_record(uid(3), gate.feature())
        .unwrap()
        .unwrap();

    gate.end_session(uid(3)).unwrap();
    let twice = gate
        .store()
        .get_record(uid(3), gate.feature())
        .unwrap()
        .unwrap();

    assert_eq!(once, twice);
}

#[test]
fn locking_one_user_leaves_others_unmetered() {
    let gate = memory_gate();
    gate.end_session(uid(4)).unwrap();

    assert!(gate.is_locked(uid(4)).unwrap());
    assert!(!gate.is_locked(uid(5)).unwrap());
    assert_eq!(gate.try_consume(uid(5)).unwrap(), Decision::Granted);
}

#[test]
fn gates_for_different_features_are_independent() {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let chat = EntitlementGate::new(Arc::clone(&db), Feature::ai_mentor_chat());
    let review = EntitlementGate::new(db, Feature::new("resume_review").unwrap());

    chat.end_session(uid(6)).unwrap();
    assert!(chat.is_locked(uid(6)).unwrap());
    assert!(!review.is_locked(uid(6)).unwrap());
}

// ---- scenarios ----

#[test]
fn unlocked_user_is_granted_without_counting() {
    let gate = memory_gate();
    let user = uid(10);
    for call in 1..=100 {
        let decision = gate.try_consume(user).unwrap();
        if [1, 5, 100].contains(&call) {
            assert_eq!(decision, Decision::Granted, "call {call}");
        }
        assert!(decision.is_granted());
    }
    assert!(!gate.is_locked(user).unwrap());
}

#[test]
fn locked_user_denied_and_repeat_end_is_harmless() {
    let gate = memory_gate();
    let user = uid(11);

    gate.end_session(user).unwrap();
    assert_eq!(gate.try_consume(user).unwrap(), Decision::Denied);

    gate.end_session(user).unwrap();
    assert_eq!(gate.try_consume(user).unwrap(), Decision::Denied);
}

#[test]
fn concurrent_end_session_leaves_one_consumed_row() {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(DatabaseManager::open(&dir.path().join("usage.db")).unwrap());
    let gate = Arc::new(EntitlementGate::new(Arc::clone(&db), Feature::ai_mentor_chat()));
    let barrier = Arc::new(Barrier::new(2));
    let user = uid(12);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let gate = Arc::clone(&gate);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                gate.end_session(user).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let rows = db
        .with_reader(|conn| usage_records::count_records_for_user(conn, user))
        .unwrap();
    assert_eq!(rows, 1);
    assert!(gate.is_locked(user).unwrap());
}

// ---- account deletion ----

#[test]
fn removed_account_starts_unmetered_again() {
    let gate = memory_gate();
    gate.end_session(uid(13)).unwrap();
    gate.store().remove_user(uid(13)).unwrap();
    assert!(!gate.is_locked(uid(13)).unwrap());
}

// ---- failure semantics ----

#[test]
fn storage_failure_propagates_instead_of_deciding() {
    let gate = EntitlementGate::new(Arc::new(UnreachableStore), Feature::ai_mentor_chat());

    assert!(matches!(
        gate.is_locked(uid(1)),
        Err(GateError::Storage(StorageError::SqliteError { .. }))
    ));
    assert!(matches!(
        gate.try_consume(uid(1)),
        Err(GateError::Storage(_))
    ));
    assert!(matches!(
        gate.end_session(uid(1)),
        Err(GateError::Storage(StorageError::DbBusy))
    ));
}

#[test]
fn gate_works_behind_a_trait_object() {
    let store: Arc<dyn UsageStore> = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let gate = EntitlementGate::new(store, Feature::ai_mentor_chat());
    gate.end_session(uid(14)).unwrap();
    assert!(gate.is_locked(uid(14)).unwrap());
}
