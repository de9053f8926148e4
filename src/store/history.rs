use std::collections::HashMap;

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use tracing::warn;

use crate::core::models::{HistoryEntry, Role};
use crate::errors::BotError;

/// Upper bound on the number of turns fed back into a prompt.
pub const MAX_HISTORY: i32 = 20;

/// Turns older than this are invisible to reads.
pub const HISTORY_WINDOW_SECS: u64 = 24 * 60 * 60;

/// Append-only per-conversation log. Partition key `id` is the conversation
/// id, sort key `timestamp` is unix seconds.
pub struct HistoryStore {
    client: DynamoClient,
    table_name: String,
}

impl HistoryStore {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Fetch the sliding-window history for one conversation: entries no
    /// older than 24 hours, newest first, at most [`MAX_HISTORY`] of them.
    /// Callers reverse the result before prompt construction. An empty
    /// result means the bot is not tracking this thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the DynamoDB query fails.
    pub async fn recent(
        &self,
        conversation_id: &str,
        now: u64,
    ) -> Result<Vec<HistoryEntry>, BotError> {
        let cutoff = now.saturating_sub(HISTORY_WINDOW_SECS);

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("id = :id AND #ts >= :cutoff")
            .expression_attribute_names("#ts", "timestamp")
            .expression_attribute_values(":id", AttributeValue::S(conversation_id.to_string()))
            .expression_attribute_values(":cutoff", AttributeValue::N(cutoff.to_string()))
            .scan_index_forward(false)
            .limit(MAX_HISTORY)
            .send()
            .await
            .map_err(|e| BotError::AwsError(format!("history query: {e}")))?;

        Ok(result.items().iter().filter_map(parse_entry).collect())
    }

    /// Persist the turns of one exchange in a single batch write. The caller
    /// passes the user turn first with the timestamp taken when processing
    /// started, so entries stay monotonically ordered within a conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if a write request cannot be built or the batch
    /// write fails.
    pub async fn append_turns(
        &self,
        conversation_id: &str,
        turns: &[HistoryEntry],
    ) -> Result<(), BotError> {
        let mut writes = Vec::with_capacity(turns.len());
        for turn in turns {
            let put = PutRequest::builder()
                .item("id", AttributeValue::S(conversation_id.to_string()))
                .item("timestamp", AttributeValue::N(turn.timestamp.to_string()))
                .item("role", AttributeValue::S(turn.role.as_str().to_string()))
                .item("content", AttributeValue::S(turn.content.clone()))
                .build()
                .map_err(|e| BotError::AwsError(format!("history put request: {e}")))?;
            writes.push(WriteRequest::builder().put_request(put).build());
        }

        let output = self
            .client
            .batch_write_item()
            .request_items(&self.table_name, writes)
            .send()
            .await
            .map_err(|e| BotError::AwsError(format!("history batch write: {e}")))?;

        if output.unprocessed_items().is_some_and(|m| !m.is_empty()) {
            warn!(
                "Batch write for conversation {} left unprocessed items",
                conversation_id
            );
        }

        Ok(())
    }
}

fn parse_entry(item: &HashMap<String, AttributeValue>) -> Option<HistoryEntry> {
    let role = Role::parse(item.get("role")?.as_s().ok()?)?;
    let content = item.get("content")?.as_s().ok()?.clone();
    let timestamp = item.get("timestamp")?.as_n().ok()?.parse().ok()?;
    Some(HistoryEntry {
        role,
        content,
        timestamp,
    })
}
