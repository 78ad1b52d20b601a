//! v001: usage_records, one row per (user_id, feature).

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS usage_records (
    user_id     INTEGER NOT NULL CHECK (user_id > 0),
    feature     TEXT NOT NULL,
    consumed    INTEGER NOT NULL DEFAULT 0 CHECK (consumed IN (0, 1)),
    consumed_at INTEGER,
    PRIMARY KEY (user_id, feature)
) STRICT;

CREATE TRIGGER IF NOT EXISTS usage_records_consumed_monotonic
BEFORE UPDATE OF consumed ON usage_records
WHEN OLD.consumed = 1 AND NEW.consumed = 0
BEGIN
    SELECT RAISE(ABORT, 'usage_records.consumed cannot revert to 0');
END;
";
