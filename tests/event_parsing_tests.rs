use serde_json::{Value, json};
use threadbot::api::event_handler::parse_event_callback;
use threadbot::api::parsing::{parse_form_data, parse_slash_command};
use threadbot::core::models::ProcessingTask;

fn mention_body(event_overrides: Value) -> Value {
    let mut event = json!({
        "type": "app_mention",
        "channel": "C0123456789",
        "user": "U0AAAAAAA",
        "ts": "1700000000.000100",
        "text": "<@U0BOTBOT> hello there"
    });
    if let (Some(event_map), Some(overrides)) = (event.as_object_mut(), event_overrides.as_object())
    {
        for (k, v) in overrides {
            event_map.insert(k.clone(), v.clone());
        }
    }
    json!({
        "type": "event_callback",
        "event_id": "Ev0123456789",
        "event": event
    })
}

#[test]
fn test_top_level_mention_roots_conversation_at_its_own_ts() {
    let task = parse_event_callback(&mention_body(json!({}))).expect("mention should parse");

    match task {
        ProcessingTask::Mention(t) => {
            assert_eq!(t.event_id, "Ev0123456789");
            assert_eq!(t.channel_id, "C0123456789");
            assert_eq!(t.thread_ts, "1700000000.000100");
            assert_eq!(t.user_id, "U0AAAAAAA");
            assert_eq!(t.text, "hello there");
        }
        other => panic!("expected a mention task, got {other:?}"),
    }
}

#[test]
fn test_mention_inside_thread_roots_at_thread_ts() {
    let body = mention_body(json!({ "thread_ts": "1699999999.000001" }));
    let task = parse_event_callback(&body).expect("mention should parse");

    match task {
        ProcessingTask::Mention(t) => assert_eq!(t.thread_ts, "1699999999.000001"),
        other => panic!("expected a mention task, got {other:?}"),
    }
}

#[test]
fn test_mention_with_nothing_but_the_mention_is_ignored() {
    let body = mention_body(json!({ "text": "<@U0BOTBOT>" }));
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_top_level_message_is_ignored() {
    // No thread_ts: a parent message, not a reply the bot tracks
    let body = mention_body(json!({ "type": "message", "text": "how are you" }));
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_threaded_message_becomes_a_reply_task() {
    let body = mention_body(json!({
        "type": "message",
        "text": "how are you",
        "thread_ts": "1699999999.000001"
    }));
    let task = parse_event_callback(&body).expect("threaded reply should parse");

    match task {
        ProcessingTask::ThreadedReply(t) => {
            assert_eq!(t.thread_ts, "1699999999.000001");
            assert_eq!(t.text, "how are you");
        }
        other => panic!("expected a reply task, got {other:?}"),
    }
}

#[test]
fn test_bot_messages_are_ignored() {
    let body = mention_body(json!({
        "type": "message",
        "thread_ts": "1699999999.000001",
        "bot_id": "B0BOTBOT"
    }));
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_subtyped_messages_are_ignored() {
    let body = mention_body(json!({
        "type": "message",
        "thread_ts": "1699999999.000001",
        "subtype": "message_changed"
    }));
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_body_without_event_id_is_ignored() {
    let mut body = mention_body(json!({}));
    body.as_object_mut().unwrap().remove("event_id");
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_unknown_event_types_are_ignored() {
    let body = mention_body(json!({ "type": "reaction_added" }));
    assert!(parse_event_callback(&body).is_none());
}

#[test]
fn test_parse_form_data_decodes_fields() {
    let fields = parse_form_data("text=why+is+the+sky+blue%3F&user_id=U1");
    assert_eq!(fields["text"], "why is the sky blue?");
    assert_eq!(fields["user_id"], "U1");
}

#[test]
fn test_parse_slash_command() {
    let body = "command=%2Fask&text=why+is+the+sky+blue%3F&user_id=U0AAAAAAA\
                &channel_id=C0123456789&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2Fabc";
    let command = parse_slash_command(body).expect("command should parse");

    assert_eq!(command.command, "/ask");
    assert_eq!(command.text, "why is the sky blue?");
    assert_eq!(command.user_id, "U0AAAAAAA");
    assert_eq!(command.channel_id, "C0123456789");
    assert_eq!(command.response_url, "https://hooks.slack.com/commands/abc");
}

#[test]
fn test_parse_slash_command_missing_field() {
    let err = parse_slash_command("command=%2Fask&text=hello").unwrap_err();
    assert!(err.to_string().contains("user_id"));
}
