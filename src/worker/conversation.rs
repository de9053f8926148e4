//! Deferred flows for mentions and threaded replies.
//!
//! Both flows share the same tail — prompt, completion, threaded post,
//! history persist — and differ only in how the history gate decides whether
//! this invocation owns the conversation.

use tracing::{error, info};

use super::failure_reply;
use crate::context::AppContext;
use crate::core::models::{HistoryEntry, Role, ThreadTask, conversation_id, unix_now};
use crate::errors::BotError;
use crate::prompt::build_prompt;

/// Answer a fresh top-level mention.
///
/// If the conversation already has history, a mention inside a tracked
/// thread also fired a message event, and the reply flow owns it — answering
/// here too would double-post.
///
/// # Errors
///
/// Returns an error if the history store is unavailable.
pub async fn answer_mention(ctx: &AppContext, task: &ThreadTask) -> Result<(), BotError> {
    if !ctx.dedup.claim(&task.event_id).await {
        return Ok(());
    }

    let conversation = conversation_id(&task.channel_id, &task.thread_ts);
    let history = ctx.history.recent(&conversation, unix_now()).await?;
    if !history.is_empty() {
        info!(
            "Conversation {} already tracked, leaving the mention to the reply flow",
            conversation
        );
        return Ok(());
    }

    respond_and_persist(ctx, task, &conversation, &[]).await
}

/// Continue a tracked thread.
///
/// The bot only continues conversations it started: a reply in a thread with
/// no stored history is ignored.
///
/// # Errors
///
/// Returns an error if the history store is unavailable.
pub async fn answer_reply(ctx: &AppContext, task: &ThreadTask) -> Result<(), BotError> {
    if !ctx.dedup.claim(&task.event_id).await {
        return Ok(());
    }

    let conversation = conversation_id(&task.channel_id, &task.thread_ts);
    let mut history = ctx.history.recent(&conversation, unix_now()).await?;
    if history.is_empty() {
        info!("No tracked conversation for {}, ignoring reply", conversation);
        return Ok(());
    }

    // The store hands back newest-first; the prompt wants oldest-first.
    history.reverse();

    respond_and_persist(ctx, task, &conversation, &history).await
}

async fn respond_and_persist(
    ctx: &AppContext,
    task: &ThreadTask,
    conversation: &str,
    history: &[HistoryEntry],
) -> Result<(), BotError> {
    let started = unix_now();
    let prompt = build_prompt(history, &task.text);

    let answer = match ctx.llm.complete(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Completion failed for conversation {}: {}", conversation, e);
            failure_reply(&e).to_string()
        }
    };

    let reply = format!("<@{}> {}", task.user_id, answer);
    if let Err(e) = ctx
        .slack
        .post_in_thread(&task.channel_id, &task.thread_ts, &reply)
        .await
    {
        error!("Failed to post reply in {}: {}", task.channel_id, e);
    }

    let turns = [
        HistoryEntry {
            role: Role::User,
            content: task.text.clone(),
            timestamp: started,
        },
        HistoryEntry {
            role: Role::Assistant,
            content: answer,
            timestamp: unix_now(),
        },
    ];
    ctx.history.append_turns(conversation, &turns).await
}
