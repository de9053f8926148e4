use aws_sdk_dynamodb::Client as DynamoClient;

use crate::ai::LlmClient;
use crate::ai::client::DEFAULT_MODEL;
use crate::core::config::AppConfig;
use crate::slack::SlackClient;
use crate::store::{DedupGuard, HistoryStore};

/// Everything a deferred flow needs, built once per invocation and passed by
/// reference. There is no module-level client state besides the connection
/// pools inside the individual clients.
pub struct AppContext {
    pub slack: SlackClient,
    pub llm: LlmClient,
    pub history: HistoryStore,
    pub dedup: DedupGuard,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Self {
        let shared_config = aws_config::from_env().load().await;
        let dynamo = DynamoClient::new(&shared_config);

        let model = config
            .openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            slack: SlackClient::new(config.slack_bot_token.clone()),
            llm: LlmClient::new(config.openai_api_key.clone(), model),
            history: HistoryStore::new(dynamo.clone(), config.history_table_name.clone()),
            dedup: DedupGuard::new(dynamo, config.dedup_table_name.clone()),
        }
    }
}
