//! Response builders for the Lambda proxy integration.

use serde_json::{Value, json};

/// 200 OK with an empty JSON body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "{}" })
}

/// 200 OK echoing a `url_verification` challenge.
#[must_use]
pub fn ok_challenge(challenge: &str) -> Value {
    json!({ "statusCode": 200, "body": challenge })
}

/// 200 OK with an ephemeral Slack message.
#[must_use]
pub fn ok_ephemeral(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "response_type": "ephemeral", "text": text }).to_string()
    })
}

/// Error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
