//! Slack API client module
//!
//! Encapsulates all Slack API interactions with retry logic and error handling.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::json;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::*;
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackTs,
};
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::errors::BotError;

static SLACK_CLIENT: Lazy<SlackHyperClient> = Lazy::new(|| {
    SlackHyperClient::new(
        SlackClientHyperConnector::new().expect("Failed to create Slack client connector"),
    )
});

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Slack API client with retry logic and error handling
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, BotError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, BotError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// Post `text` as a reply in the thread rooted at `thread_ts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails after retries.
    pub async fn post_in_thread(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), BotError> {
        self.with_retry(|| async {
            let session = SLACK_CLIENT.open_session(&self.token);

            let post_req = SlackApiChatPostMessageRequest::new(
                SlackChannelId(channel_id.to_string()),
                SlackMessageContent::new().with_text(text.to_string()),
            )
            .with_thread_ts(SlackTs(thread_ts.to_string()));

            session.chat_post_message(&post_req).await?;

            Ok(())
        })
        .await
    }

    /// Answer a slash command by posting to its `response_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails after retries or Slack
    /// rejects the payload.
    pub async fn respond_to_command(
        &self,
        response_url: &str,
        text: &str,
    ) -> Result<(), BotError> {
        let payload = json!({
            "response_type": "in_channel",
            "text": text,
        });

        self.with_retry(|| async {
            let response = HTTP_CLIENT
                .post(response_url)
                .json(&payload)
                .send()
                .await
                .map_err(|e| BotError::HttpError(format!("response_url request failed: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(BotError::ApiError(format!(
                    "Failed to answer command: {} - {}",
                    status, text
                )));
            }

            Ok(())
        })
        .await
    }
}
