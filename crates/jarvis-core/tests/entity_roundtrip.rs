//! Serde roundtrip and JsonSchema validation tests for the entity types.

use jarvis_core::entities::{ChatMessage, Task};
use jarvis_core::enums::{Priority, Sender, TaskStatus};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "task-1704121200000-k3j9x0a1b".into(),
        text: "call John".into(),
        parsed_command: "Call John at 3pm".into(),
        status: TaskStatus::InProgress,
        created_at: "2024-01-01T12:00:00.000Z".into(),
        due_date: Some("2024-01-01T15:00:00Z".into()),
        priority: Priority::High,
        reminder_sent: false,
    }
);

roundtrip_and_validate!(
    task_without_due_date_roundtrip,
    Task,
    Task {
        id: "7".into(),
        text: String::new(),
        parsed_command: String::new(),
        status: TaskStatus::Done,
        created_at: "2024-01-01T12:00:00.000Z".into(),
        due_date: None,
        priority: Priority::Medium,
        reminder_sent: false,
    }
);

roundtrip_and_validate!(
    chat_message_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "msg-1704121200000-aaaaaaaaa".into(),
        text: "Got it!".into(),
        sender: Sender::Assistant,
        timestamp: "2024-01-01T12:00:00.000Z".into(),
    }
);

#[test]
fn task_serializes_with_camel_case_keys() {
    let task = Task {
        id: "1".into(),
        text: "buy milk".into(),
        parsed_command: String::new(),
        status: TaskStatus::InProgress,
        created_at: "2024-01-01T12:00:00.000Z".into(),
        due_date: None,
        priority: Priority::Low,
        reminder_sent: false,
    };
    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "1",
            "text": "buy milk",
            "parsedCommand": "",
            "status": "in-progress",
            "createdAt": "2024-01-01T12:00:00.000Z",
            "priority": "low",
            "reminderSent": false,
        })
    );
}

#[test]
fn persisted_task_with_missing_optionals_reads_with_defaults() {
    let task: Task = serde_json::from_str(
        r#"{"id":"x","text":"t","createdAt":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.parsed_command.is_empty());
    assert!(!task.reminder_sent);
    assert_eq!(task.display_text(), "t");
}

#[test]
fn chat_message_constructors_stamp_id_and_time() {
    let message = ChatMessage::user("hello");
    assert_eq!(message.sender, Sender::User);
    assert!(message.id.starts_with("msg-"));
    assert!(!message.timestamp.is_empty());
    assert_eq!(ChatMessage::assistant("hi").sender, Sender::Assistant);
}
