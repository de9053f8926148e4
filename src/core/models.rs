use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Speaker of a conversation turn, matching the chat-completion roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One persisted conversation turn. Immutable once written; turns older than
/// the 24-hour window are excluded from reads rather than deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
    pub timestamp: u64,
}

/// Composite id for one threaded exchange: channel plus thread-root timestamp.
#[must_use]
pub fn conversation_id(channel_id: &str, thread_ts: &str) -> String {
    format!("{channel_id}:{thread_ts}")
}

#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Work item for a mention or a threaded reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadTask {
    pub correlation_id: String,
    pub event_id: String,
    pub channel_id: String,
    /// Timestamp of the thread root this exchange belongs to.
    pub thread_ts: String,
    pub user_id: String,
    pub text: String,
}

/// Work item for a slash command. No thread, no stored conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandTask {
    pub correlation_id: String,
    pub user_id: String,
    pub channel_id: String,
    pub response_url: String,
    pub text: String,
}

/// Queued unit of deferred work, one variant per inbound event shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessingTask {
    Mention(ThreadTask),
    ThreadedReply(ThreadTask),
    SlashCommand(CommandTask),
}

impl ProcessingTask {
    #[must_use]
    pub fn correlation_id(&self) -> &str {
        match self {
            ProcessingTask::Mention(t) | ProcessingTask::ThreadedReply(t) => &t.correlation_id,
            ProcessingTask::SlashCommand(c) => &c.correlation_id,
        }
    }
}
