//! Worker Lambda handler and deferred event flows.

pub mod command;
pub mod conversation;
pub mod handler;

pub use handler::handler;

use crate::errors::BotError;

/// Canonical failure message posted when the model gives no answer.
pub const FAILURE_MESSAGE: &str =
    "Sorry, I couldn't come up with an answer this time. Please try again later.";

/// Variant posted when the model call hit its timeout.
pub const TIMEOUT_MESSAGE: &str =
    "Sorry, the model took too long and the request timed out. Please try again.";

/// The displayable text posted in place of an answer. Formatting lives here,
/// in the router, so the completion client stays free of user-facing copy.
#[must_use]
pub fn failure_reply(error: &BotError) -> &'static str {
    match error {
        BotError::ModelTimeout => TIMEOUT_MESSAGE,
        _ => FAILURE_MESSAGE,
    }
}
