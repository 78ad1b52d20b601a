//! ConversationState — ordered user/assistant entries for one chat session.

use careertech_core::types::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

/// Chat history owned by the caller (typically stored in the web session)
/// and passed explicitly into every `MentorChat` call.
///
/// Holds only `user` and `assistant` entries; the system prompt is added per
/// request by `with_system_prompt` and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn reset(&mut self) {
        self.messages.clear();
    }

    /// Request payload for the completion call: system prompt first, then history.
    pub fn with_system_prompt(&self, prompt: &str) -> Vec<ChatMessage> {
        let mut request = Vec::with_capacity(self.messages.len() + 1);
        request.push(ChatMessage::system(prompt));
        request.extend(self.messages.iter().cloned());
        request
    }

    /// Serialize for session storage.
    pub fn to_session_value(&self) -> serde_json::Value {
        serde_json::to_value(&self.messages).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }

    /// Restore from session storage. Anything that is not a list of
    /// role-tagged messages yields an empty conversation; stray `system`
    /// entries are dropped.
    pub fn from_session_value(value: &serde_json::Value) -> Self {
        match serde_json::from_value::<Vec<ChatMessage>>(value.clone()) {
            Ok(messages) => Self {
                messages: messages
                    .into_iter()
                    .filter(|m| m.role != Role::System)
                    .collect(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "discarding malformed conversation history");
                Self::default()
            }
        }
    }
}
