//! DynamoDB-backed persistence: conversation history and the idempotency
//! gate for at-least-once event delivery.

pub mod dedup;
pub mod history;

pub use dedup::DedupGuard;
pub use history::HistoryStore;
