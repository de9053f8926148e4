//! OpenAI chat-completion client.

pub mod client;

pub use client::LlmClient;
