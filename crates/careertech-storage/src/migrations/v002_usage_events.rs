//! v002: usage_events, append-only log of consumption and account removal.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS usage_events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL,
    feature     TEXT,
    event       TEXT NOT NULL CHECK (event IN ('consumed', 'user_removed')),
    recorded_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_usage_events_user ON usage_events(user_id);
";
