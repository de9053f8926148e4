//! Prompt construction.
//!
//! Pure functions only: assembling the message list for the model and
//! cleaning inbound Slack text. No I/O happens here.

use once_cell::sync::Lazy;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use regex::Regex;

use crate::core::models::{HistoryEntry, Role};

/// Fixed system message prepended to every prompt.
pub const SYSTEM_PROMPT: &str = "You are an excellent assistant.";

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@[A-Z0-9]+>\s*").expect("static regex compile"));

/// Strip `<@U…>` mention tokens from inbound text so the model sees the
/// question, not the addressing.
#[must_use]
pub fn strip_mentions(text: &str) -> String {
    MENTION_RE.replace_all(text, "").trim().to_string()
}

fn message(role: MessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(content),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

fn to_message_role(role: Role) -> MessageRole {
    match role {
        Role::System => MessageRole::system,
        Role::User => MessageRole::user,
        Role::Assistant => MessageRole::assistant,
    }
}

/// Build the ordered message list for one completion call.
///
/// The system message comes first, then `history` in the order given
/// (callers pass it oldest-first), then `new_message` as the final user turn.
/// Output length is always `history.len() + 2`.
#[must_use]
pub fn build_prompt(history: &[HistoryEntry], new_message: &str) -> Vec<ChatCompletionMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(message(MessageRole::system, SYSTEM_PROMPT.to_string()));

    for entry in history {
        messages.push(message(to_message_role(entry.role), entry.content.clone()));
    }

    messages.push(message(MessageRole::user, new_message.to_string()));
    messages
}
