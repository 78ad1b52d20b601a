//! Caller-owned conversation history.

pub mod state;

pub use state::ConversationState;
