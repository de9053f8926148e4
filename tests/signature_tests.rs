use std::time::{SystemTime, UNIX_EPOCH};
use threadbot::api::signature::{compute_signature, verify_slack_signature};

const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

fn current_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        .to_string()
}

#[test]
fn test_valid_signature_is_accepted() {
    let timestamp = current_timestamp();
    let body = "token=xyz&command=%2Fask&text=hello";
    let signature = compute_signature(&timestamp, body, SECRET);

    assert!(signature.starts_with("v0="));
    assert!(verify_slack_signature(body, &timestamp, &signature, SECRET));
}

#[test]
fn test_tampered_body_is_rejected() {
    let timestamp = current_timestamp();
    let signature = compute_signature(&timestamp, "original body", SECRET);

    assert!(!verify_slack_signature(
        "tampered body",
        &timestamp,
        &signature,
        SECRET
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let timestamp = current_timestamp();
    let body = "payload=test";
    let signature = compute_signature(&timestamp, body, SECRET);

    assert!(!verify_slack_signature(
        body,
        &timestamp,
        &signature,
        "a-different-secret"
    ));
}

#[test]
fn test_stale_timestamp_is_rejected() {
    // Correctly signed, but from far outside the replay window
    let timestamp = "1600000000";
    let body = "payload=test";
    let signature = compute_signature(timestamp, body, SECRET);

    assert!(!verify_slack_signature(body, timestamp, &signature, SECRET));
}

#[test]
fn test_signature_is_deterministic() {
    let signature_a = compute_signature("1700000000", "body", SECRET);
    let signature_b = compute_signature("1700000000", "body", SECRET);
    assert_eq!(signature_a, signature_b);
}
