//! Seams to the external collaborators: persistence and the metered action.

pub mod chat_completion;
pub mod usage_store;

pub use chat_completion::ChatCompletion;
pub use usage_store::UsageStore;
