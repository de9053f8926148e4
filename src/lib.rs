//! threadbot - a Slack chat bot that answers mentions and keeps threaded
//! conversations going with an OpenAI chat model.
//!
//! The crate implements a two-Lambda architecture:
//! 1. An API Lambda that verifies and acknowledges Slack events within the
//!    delivery deadline, then queues tasks
//! 2. A Worker Lambda that processes queued tasks: it deduplicates event
//!    deliveries, loads the thread's recent history from DynamoDB, asks the
//!    model, posts the answer back into the thread, and persists both turns
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SQS for task queuing between Lambdas
//! - DynamoDB for conversation history and duplicate-event suppression
//! - slack-morphism for Slack API interactions
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use threadbot::AppContext;
//! use threadbot::core::config::AppConfig;
//! use threadbot::prompt::build_prompt;
//!
//! #[tokio::main]
//! async fn main() {
//!     threadbot::setup_logging();
//!
//!     let config = AppConfig::from_env().expect("environment is incomplete");
//!     let ctx = AppContext::new(&config).await;
//!
//!     let prompt = build_prompt(&[], "why is the sky blue?");
//!     if let Ok(answer) = ctx.llm.complete(&prompt).await {
//!         ctx.slack
//!             .post_in_thread("C0123456789", "1700000000.000100", &answer)
//!             .await
//!             .expect("post failed");
//!     }
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod context;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod slack;
pub mod store;
pub mod worker;

pub use context::AppContext;
pub use errors::BotError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of each Lambda handler process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
