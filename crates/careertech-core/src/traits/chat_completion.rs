use crate::errors::CompletionError;
use crate::types::ChatMessage;

/// The metered action: a hosted chat-completion call.
///
/// Retries and timeouts, if any, belong to the implementation.
pub trait ChatCompletion: Send + Sync {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}
