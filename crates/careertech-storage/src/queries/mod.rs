//! Query modules for each table.

pub mod usage_events;
pub mod usage_records;
