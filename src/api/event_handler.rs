//! Handler for Slack Events API callbacks.
//!
//! Maps `event_callback` payloads (`app_mention`, `message`) to queued
//! processing tasks. Everything here is fast-ack territory: parse, enqueue,
//! return 200. Events that cannot be handled are acked silently so Slack
//! does not redeliver them.

use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers::{ok_challenge, ok_empty};
use super::sqs;
use crate::core::config::AppConfig;
use crate::core::models::{ProcessingTask, ThreadTask};
use crate::prompt::strip_mentions;

/// Map an `event_callback` body to a processing task, or `None` for anything
/// the bot ignores.
///
/// - `app_mention` becomes a [`ProcessingTask::Mention`]; its conversation is
///   rooted at `thread_ts` when the mention happened inside a thread and at
///   the message's own `ts` otherwise.
/// - `message` becomes a [`ProcessingTask::ThreadedReply`] only when it
///   carries a `thread_ts`; top-level messages are not the bot's business.
/// - Messages from bots and messages with a subtype are dropped so the bot
///   never answers itself.
#[must_use]
pub fn parse_event_callback(json_body: &Value) -> Option<ProcessingTask> {
    let event_id = json_body.get("event_id")?.as_str()?;
    let event = json_body.get("event")?;

    if event.get("bot_id").is_some() || event.get("subtype").is_some() {
        return None;
    }

    let event_type = event.get("type")?.as_str()?;
    let channel_id = event.get("channel")?.as_str()?;
    let user_id = event.get("user")?.as_str()?;
    let ts = event.get("ts")?.as_str()?;
    let raw_text = event.get("text")?.as_str()?;
    let thread_ts = event.get("thread_ts").and_then(|t| t.as_str());

    match event_type {
        "app_mention" => {
            let text = strip_mentions(raw_text);
            if text.is_empty() {
                return None;
            }
            Some(ProcessingTask::Mention(ThreadTask {
                correlation_id: Uuid::new_v4().to_string(),
                event_id: event_id.to_string(),
                channel_id: channel_id.to_string(),
                thread_ts: thread_ts.unwrap_or(ts).to_string(),
                user_id: user_id.to_string(),
                text,
            }))
        }
        "message" => {
            let thread_ts = thread_ts?;
            if raw_text.trim().is_empty() {
                return None;
            }
            Some(ProcessingTask::ThreadedReply(ThreadTask {
                correlation_id: Uuid::new_v4().to_string(),
                event_id: event_id.to_string(),
                channel_id: channel_id.to_string(),
                thread_ts: thread_ts.to_string(),
                user_id: user_id.to_string(),
                text: raw_text.trim().to_string(),
            }))
        }
        _ => None,
    }
}

/// Handle an Events API body: answer the `url_verification` handshake, or
/// parse and enqueue an `event_callback`. The ack is unconditional — a failed
/// enqueue is logged, never surfaced to Slack.
pub async fn handle_event_callback(config: &AppConfig, json_body: &Value) -> Value {
    let body_type = json_body.get("type").and_then(|t| t.as_str()).unwrap_or("");

    if body_type == "url_verification" {
        let challenge = json_body
            .get("challenge")
            .and_then(|c| c.as_str())
            .unwrap_or("");
        return ok_challenge(challenge);
    }

    if body_type != "event_callback" {
        return ok_empty();
    }

    let Some(task) = parse_event_callback(json_body) else {
        return ok_empty();
    };

    info!(
        correlation_id = %task.correlation_id(),
        "Enqueueing event for deferred processing"
    );

    if let Err(e) = sqs::enqueue_task(&task, config).await {
        error!(
            "Failed to enqueue task (correlation_id={}): {}",
            task.correlation_id(),
            e
        );
    }

    ok_empty()
}
