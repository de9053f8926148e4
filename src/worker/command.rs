//! Deferred flow for slash commands.

use tracing::error;

use super::failure_reply;
use crate::context::AppContext;
use crate::core::models::CommandTask;
use crate::errors::BotError;
use crate::prompt::build_prompt;

/// Answer a slash command directly through its `response_url`. No dedup gate
/// (slash commands are delivered once) and no history: the prompt is just
/// the system message plus the command's text.
///
/// # Errors
///
/// Currently infallible — completion and delivery failures are logged and
/// absorbed — but kept fallible to match the other deferred flows.
pub async fn answer_command(ctx: &AppContext, task: &CommandTask) -> Result<(), BotError> {
    let prompt = build_prompt(&[], &task.text);

    let answer = match ctx.llm.complete(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Completion failed for command from {}: {}", task.user_id, e);
            failure_reply(&e).to_string()
        }
    };

    if let Err(e) = ctx.slack.respond_to_command(&task.response_url, &answer).await {
        error!("Failed to answer command from {}: {}", task.user_id, e);
    }

    Ok(())
}
