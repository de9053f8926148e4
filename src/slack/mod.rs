//! Slack API surface: posting replies into threads and answering slash
//! commands via their response URL.

pub mod client;

pub use client::SlackClient;
