//! Handler for the bot's slash command.
//!
//! Slash commands skip the conversation store entirely: the answer goes back
//! through the command's `response_url`, not into a tracked thread.

use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers::ok_ephemeral;
use super::parsing::parse_slash_command;
use super::sqs;
use crate::core::config::AppConfig;
use crate::core::models::{CommandTask, ProcessingTask};
use crate::errors::BotError;

/// Handle a slash command from Slack.
///
/// # Errors
///
/// Returns an error if the form body cannot be parsed.
pub async fn handle_slash_command(config: &AppConfig, body: &str) -> Result<Value, BotError> {
    let command = parse_slash_command(body)?;

    if command.text.trim().is_empty() {
        return Ok(ok_ephemeral(
            "Ask me something, e.g. `/ask why is the sky blue?`",
        ));
    }

    let correlation_id = Uuid::new_v4().to_string();
    info!(
        "Slash command accepted, correlation_id={}",
        correlation_id
    );

    let task = ProcessingTask::SlashCommand(CommandTask {
        correlation_id: correlation_id.clone(),
        user_id: command.user_id,
        channel_id: command.channel_id,
        response_url: command.response_url,
        text: command.text.trim().to_string(),
    });

    if let Err(e) = sqs::enqueue_task(&task, config).await {
        error!(
            "Failed to enqueue task (correlation_id={}): {}",
            correlation_id, e
        );
        return Ok(ok_ephemeral(
            "Something went wrong accepting the command. Please try again.",
        ));
    }

    Ok(ok_ephemeral("Thinking…"))
}
