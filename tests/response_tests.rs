use serde_json::Value;
use threadbot::BotError;
use threadbot::api::helpers::{err_response, ok_challenge, ok_empty, ok_ephemeral};
use threadbot::worker::{FAILURE_MESSAGE, TIMEOUT_MESSAGE, failure_reply};

#[test]
fn test_timeout_gets_a_distinct_user_visible_reply() {
    let reply = failure_reply(&BotError::ModelTimeout);
    assert_eq!(reply, TIMEOUT_MESSAGE);
    assert!(reply.contains("timed out"));
}

#[test]
fn test_other_model_failures_get_the_canonical_reply() {
    let api_failure = BotError::ModelError("rate limited".to_string());
    assert_eq!(failure_reply(&api_failure), FAILURE_MESSAGE);

    let transport_failure = BotError::HttpError("connection reset".to_string());
    assert_eq!(failure_reply(&transport_failure), FAILURE_MESSAGE);
}

#[test]
fn test_ok_empty_shape() {
    let response = ok_empty();
    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], "{}");
}

#[test]
fn test_ok_challenge_echoes_the_challenge() {
    let response = ok_challenge("3eZbrw1aB1");
    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], "3eZbrw1aB1");
}

#[test]
fn test_ok_ephemeral_wraps_text() {
    let response = ok_ephemeral("Thinking…");
    assert_eq!(response["statusCode"], 200);

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["response_type"], "ephemeral");
    assert_eq!(body["text"], "Thinking…");
}

#[test]
fn test_err_response_carries_status_and_message() {
    let response = err_response(401, "Invalid Slack signature");
    assert_eq!(response["statusCode"], 401);

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"], "Invalid Slack signature");
}
