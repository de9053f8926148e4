use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub history_table_name: String,
    pub dedup_table_name: String,
    pub processing_queue_url: String,
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    pub openai_api_key: String,
    pub openai_model: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            history_table_name: env::var("HISTORY_TABLE_NAME")
                .map_err(|e| format!("HISTORY_TABLE_NAME: {}", e))?,
            dedup_table_name: env::var("DEDUP_TABLE_NAME")
                .map_err(|e| format!("DEDUP_TABLE_NAME: {}", e))?,
            processing_queue_url: env::var("PROCESSING_QUEUE_URL")
                .map_err(|e| format!("PROCESSING_QUEUE_URL: {}", e))?,
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET")
                .map_err(|e| format!("SLACK_SIGNING_SECRET: {}", e))?,
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}
