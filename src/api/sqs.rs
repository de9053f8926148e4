use aws_sdk_sqs::Client as SqsClient;

use crate::core::{config::AppConfig, models::ProcessingTask};
use crate::errors::BotError;

/// Hand a task to the worker via the processing queue.
///
/// # Errors
///
/// Returns an error if serialization fails or the message cannot be sent.
pub async fn enqueue_task(task: &ProcessingTask, config: &AppConfig) -> Result<(), BotError> {
    let shared_config = aws_config::from_env().load().await;
    let client = SqsClient::new(&shared_config);
    let message_body = serde_json::to_string(task)
        .map_err(|e| BotError::ParseError(format!("Failed to serialize task: {e}")))?;

    client
        .send_message()
        .queue_url(&config.processing_queue_url)
        .message_body(message_body)
        .send()
        .await
        .map_err(|e| BotError::AwsError(format!("Failed to send message to SQS: {e}")))?;
    Ok(())
}
