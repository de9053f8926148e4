use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info};

/// Distributed idempotency gate. Slack delivers events at least once; the
/// conditional insert here is the only cross-invocation coordination in the
/// system.
pub struct DedupGuard {
    client: DynamoClient,
    table_name: String,
}

impl DedupGuard {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Try to claim `event_id`. Returns `true` only for the first successful
    /// claim. A failed condition check means another invocation got there
    /// first; any other store error is also treated as "already handled" so
    /// a flaky store can never produce a duplicate user-visible reply.
    pub async fn claim(&self, event_id: &str) -> bool {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(event_id.to_string()))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => true,
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_conditional_check_failed_exception() {
                    info!("Event {} already claimed, skipping duplicate", event_id);
                } else {
                    error!(
                        "Dedup claim for event {} failed, treating as already handled: {}",
                        event_id, service_err
                    );
                }
                false
            }
        }
    }
}
