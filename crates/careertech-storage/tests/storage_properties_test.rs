//! Property tests for usage record upserts.

use careertech_core::traits::UsageStore;
use careertech_core::types::{Feature, UserId};
use careertech_storage::queries::usage_records;
use careertech_storage::DatabaseManager;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Any number of marks yields one row, one transition, and the first timestamp.
    #[test]
    fn repeated_marks_keep_first_timestamp(
        user in 1i64..1_000_000,
        stamps in prop::collection::vec(0i64..2_000_000_000, 1..12),
    ) {
        let db = DatabaseManager::open_in_memory().unwrap();
        let feature = Feature::ai_mentor_chat();
        let id = UserId::new(user).unwrap();

        let transitions = stamps
            .iter()
            .map(|at| db.mark_consumed(id, &feature, *at).unwrap())
            .filter(|t| *t)
            .count();
        prop_assert_eq!(transitions, 1);

        let record = db.get_record(id, &feature).unwrap().unwrap();
        prop_assert!(record.consumed);
        prop_assert_eq!(record.consumed_at, Some(stamps[0]));

        let rows = db
            .with_reader(|conn| usage_records::count_records_for_user(conn, id))
            .unwrap();
        prop_assert_eq!(rows, 1);
    }
}
