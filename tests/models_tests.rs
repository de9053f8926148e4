use threadbot::core::models::{
    CommandTask, ProcessingTask, Role, ThreadTask, conversation_id,
};

#[test]
fn test_role_string_round_trip() {
    for role in [Role::System, Role::User, Role::Assistant] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("moderator"), None);
}

#[test]
fn test_conversation_id_is_channel_and_thread_root() {
    assert_eq!(
        conversation_id("C0123456789", "1700000000.000100"),
        "C0123456789:1700000000.000100"
    );
}

#[test]
fn test_task_kind_tag_discriminates_variants() {
    let task = ProcessingTask::Mention(ThreadTask {
        correlation_id: "corr-1".to_string(),
        event_id: "Ev1".to_string(),
        channel_id: "C1".to_string(),
        thread_ts: "1700000000.000100".to_string(),
        user_id: "U1".to_string(),
        text: "hello".to_string(),
    });

    let encoded = serde_json::to_string(&task).unwrap();
    assert!(encoded.contains("\"kind\":\"mention\""));

    match serde_json::from_str::<ProcessingTask>(&encoded).unwrap() {
        ProcessingTask::Mention(t) => assert_eq!(t.event_id, "Ev1"),
        other => panic!("expected a mention task, got {other:?}"),
    }
}

#[test]
fn test_slash_command_task_deserializes_from_its_tag() {
    let task = ProcessingTask::SlashCommand(CommandTask {
        correlation_id: "corr-2".to_string(),
        user_id: "U1".to_string(),
        channel_id: "C1".to_string(),
        response_url: "https://hooks.slack.com/commands/abc".to_string(),
        text: "why is the sky blue?".to_string(),
    });

    let encoded = serde_json::to_string(&task).unwrap();
    assert!(encoded.contains("\"kind\":\"slash_command\""));

    let decoded: ProcessingTask = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.correlation_id(), "corr-2");
}
