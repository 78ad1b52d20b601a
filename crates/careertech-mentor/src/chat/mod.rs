//! AI mentor chat: the metered-action invocation wrapper and its HTTP backend.

pub mod groq;
pub mod mentor;
pub mod prompt;

pub use groq::GroqCompletion;
pub use mentor::{ChatTurn, MentorChat};
pub use prompt::MENTOR_SYSTEM_PROMPT;
