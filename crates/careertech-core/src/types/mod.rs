//! Shared domain types.

pub mod feature;
pub mod message;
pub mod usage_record;
pub mod user_id;

pub use feature::Feature;
pub use message::{ChatMessage, Role};
pub use usage_record::UsageRecord;
pub use user_id::UserId;
