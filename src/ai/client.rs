//! LLM (OpenAI) API client module
//!
//! Encapsulates the chat-completion call. The client reports failures as
//! typed errors; user-facing fallback text is the worker's concern.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::errors::BotError;

/// Bound on one completion call so a hung request cannot run the deferred
/// invocation to its own limit.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(50);

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completion client with deterministic sampling (temperature 0).
pub struct LlmClient {
    api_key: String,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
        }
    }

    /// Request a completion for an ordered message list.
    ///
    /// # Errors
    ///
    /// Returns `ModelTimeout` when the request exceeds the client timeout,
    /// `ModelError` for API-level failures, and `HttpError` for transport
    /// failures.
    pub async fn complete(&self, messages: &[ChatCompletionMessage]) -> Result<String, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Sending prompt to model:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!("Requesting completion with {} messages", messages.len());

        let chat_messages: Vec<Value> = messages
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content = match &msg.content {
                    Content::Text(text) => text.clone(),
                    _ => String::new(),
                };

                json!({ "role": role_str, "content": content })
            })
            .collect();

        let request_body = json!({
            "model": self.model_name,
            "messages": chat_messages,
            "temperature": 0,
        });

        let client = Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let response = client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::ModelError(error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                BotError::ModelTimeout
            } else {
                BotError::ModelError(format!("Failed to parse model response: {e}"))
            }
        })?;

        response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| BotError::ModelError("No text in response".to_string()))
    }
}
