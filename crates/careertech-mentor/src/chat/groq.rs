//! Hosted chat-completion client (Groq, OpenAI-compatible API).
//!
//! Uses the blocking `reqwest` client; call it from a worker thread, not
//! from inside an async runtime.

use std::time::Duration;

use careertech_core::config::ChatConfig;
use careertech_core::errors::CompletionError;
use careertech_core::traits::ChatCompletion;
use careertech_core::types::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct GroqCompletion {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl GroqCompletion {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Http {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        })
    }

    /// `Ok(None)` when no API key is configured.
    pub fn from_config(config: &ChatConfig) -> Result<Option<Self>, CompletionError> {
        let Some(api_key) = config.api_key.as_deref().filter(|_| config.is_configured()) else {
            return Ok(None);
        };
        Self::new(
            api_key.trim(),
            config.effective_base_url(),
            config.effective_model(),
            config.effective_temperature(),
            Duration::from_secs(config.effective_timeout_secs()),
        )
        .map(Some)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatCompletion for GroqCompletion {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| CompletionError::Http {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| CompletionError::Http {
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(model = %self.model, bytes = body.len(), "completion received");
        parse_completion_body(&body)
    }
}

/// Extract the first choice's message content.
fn parse_completion_body(body: &str) -> Result<String, CompletionError> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::MalformedResponse {
            message: e.to_string(),
        })?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::MalformedResponse {
            message: "response has no message content".to_string(),
        })
}
