//! # careertech-mentor
//!
//! The free-trial entitlement gate for the AI mentor chat, the caller-owned
//! conversation history, and the wrapper that invokes the hosted chat model
//! only when the gate allows it.

pub mod chat;
pub mod conversation;
pub mod gate;

pub use chat::{ChatTurn, GroqCompletion, MentorChat, MENTOR_SYSTEM_PROMPT};
pub use conversation::ConversationState;
pub use gate::{Decision, EntitlementGate, GateState};
