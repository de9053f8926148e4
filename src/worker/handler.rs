use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{command, conversation};
use crate::context::AppContext;
use crate::core::config::AppConfig;
use crate::core::models::ProcessingTask;

pub use self::function_handler as handler;

/// Lambda handler for the Worker entrypoint. Parses the SQS batch and runs
/// each task's deferred flow. Tasks are independent: a failing task is
/// logged and the rest of the batch still runs.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        "Worker Lambda received SQS event payload: {:?}",
        event.payload
    );

    let bodies: Vec<&str> = event
        .payload
        .get("Records")
        .and_then(|records| records.as_array())
        .map(|records| {
            records
                .iter()
                .filter_map(|record| record.get("body").and_then(|body| body.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if bodies.is_empty() {
        return Err(Error::from("No SQS record bodies in event"));
    }

    let ctx = AppContext::new(&config).await;

    for body in bodies {
        let task: ProcessingTask = match serde_json::from_str(body) {
            Ok(task) => task,
            Err(e) => {
                error!("Failed to parse SQS message body into ProcessingTask: {}", e);
                continue;
            }
        };

        info!("Processing task {}", task.correlation_id());

        let result = match &task {
            ProcessingTask::Mention(t) => conversation::answer_mention(&ctx, t).await,
            ProcessingTask::ThreadedReply(t) => conversation::answer_reply(&ctx, t).await,
            ProcessingTask::SlashCommand(c) => command::answer_command(&ctx, c).await,
        };

        if let Err(e) = result {
            error!("Task {} failed: {}", task.correlation_id(), e);
        }
    }

    Ok(())
}
