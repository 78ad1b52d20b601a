//! Calls the hosted model only when the gate grants access.

use std::sync::Arc;

use careertech_core::config::CareerTechConfig;
use careertech_core::constants::{BACKEND_NOT_CONFIGURED_MESSAGE, DEFAULT_REFUSAL_MESSAGE};
use careertech_core::errors::{ConfigError, GateError, GateResult};
use careertech_core::traits::{ChatCompletion, UsageStore};
use careertech_core::types::UserId;

use super::prompt::MENTOR_SYSTEM_PROMPT;
use crate::conversation::ConversationState;
use crate::gate::{Decision, EntitlementGate};

/// Outcome of one `send`. Every variant except `Ignored` appended a user entry
/// and an assistant entry to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTurn {
    /// Blank message; nothing appended.
    Ignored,
    /// Gate denied access; the refusal message was appended instead of a reply.
    Refused(String),
    /// No completion backend configured; a notice was appended.
    Unavailable(String),
    /// The model answered.
    Answered(String),
    /// The model call failed; the error text was appended.
    Failed(String),
}

impl ChatTurn {
    /// The assistant entry appended by this turn, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            ChatTurn::Ignored => None,
            ChatTurn::Refused(reply)
            | ChatTurn::Unavailable(reply)
            | ChatTurn::Answered(reply)
            | ChatTurn::Failed(reply) => Some(reply),
        }
    }
}

/// Gate + optional completion backend.
///
/// A `GateError` (invalid user or storage failure) leaves the conversation
/// untouched; the caller renders its own "try again" message.
pub struct MentorChat<S, C>
where
    S: UsageStore + ?Sized,
    C: ChatCompletion + ?Sized,
{
    gate: EntitlementGate<S>,
    completion: Option<Arc<C>>,
    system_prompt: String,
    refusal_message: String,
}

impl<S, C> MentorChat<S, C>
where
    S: UsageStore + ?Sized,
    C: ChatCompletion + ?Sized,
{
    pub fn new(gate: EntitlementGate<S>, completion: Option<Arc<C>>) -> Self {
        Self {
            gate,
            completion,
            system_prompt: MENTOR_SYSTEM_PROMPT.to_string(),
            refusal_message: DEFAULT_REFUSAL_MESSAGE.to_string(),
        }
    }

    /// Build from application config: feature key, refusal text, prompt override.
    pub fn from_config(
        store: Arc<S>,
        completion: Option<Arc<C>>,
        config: &CareerTechConfig,
    ) -> Result<Self, ConfigError> {
        let gate = EntitlementGate::new(store, config.gate.effective_feature()?);
        let mut chat = Self::new(gate, completion)
            .with_refusal_message(config.gate.effective_refusal_message());
        if let Some(ref prompt) = config.chat.system_prompt {
            chat = chat.with_system_prompt(prompt.clone());
        }
        Ok(chat)
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_refusal_message(mut self, message: impl Into<String>) -> Self {
        self.refusal_message = message.into();
        self
    }

    pub fn gate(&self) -> &EntitlementGate<S> {
        &self.gate
    }

    pub fn is_configured(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the chat page should show the "free session used" state.
    pub fn is_locked(&self, user: Option<UserId>) -> GateResult<bool> {
        self.gate.is_locked(require_user(user)?)
    }

    /// Handle one user message.
    pub fn send(
        &self,
        user: Option<UserId>,
        conversation: &mut ConversationState,
        message: &str,
    ) -> GateResult<ChatTurn> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(ChatTurn::Ignored);
        }
        let user_id = require_user(user)?;

        // Decide before touching the conversation so a storage error leaves it as it was.
        let decision = self.gate.try_consume(user_id)?;
        conversation.push_user(message);

        let turn = match decision {
            Decision::Denied => ChatTurn::Refused(self.refusal_message.clone()),
            Decision::Granted => match &self.completion {
                None => ChatTurn::Unavailable(BACKEND_NOT_CONFIGURED_MESSAGE.to_string()),
                Some(completion) => {
                    let request = conversation.with_system_prompt(&self.system_prompt);
                    match completion.complete(&request) {
                        Ok(reply) => ChatTurn::Answered(reply),
                        Err(e) => {
                            tracing::warn!(user_id = %user_id, error = %e, "completion failed");
                            ChatTurn::Failed(format!("AI error: {e}"))
                        }
                    }
                }
            },
        };

        if let Some(reply) = turn.reply() {
            conversation.push_assistant(reply);
        }
        Ok(turn)
    }

    /// Explicit "end session": lock the user's allowance and clear the history.
    pub fn end_session(
        &self,
        user: Option<UserId>,
        conversation: &mut ConversationState,
    ) -> GateResult<()> {
        let user_id = require_user(user)?;
        self.gate.end_session(user_id)?;
        conversation.reset();
        Ok(())
    }

    /// Start over without consuming the allowance.
    pub fn reset(&self, conversation: &mut ConversationState) {
        conversation.reset();
    }
}

fn require_user(user: Option<UserId>) -> GateResult<UserId> {
    user.ok_or_else(|| GateError::invalid_user("no authenticated user in session"))
}
