//! Normalization of webhook replies into [`Task`] records.
//!
//! The task-creation webhook answers in one of several shapes:
//!
//! - an LLM envelope, `{"content": {"parts": [{"text": "<json string>"}]}}`
//! - a bare string, sometimes JSON-encoded, sometimes the sentinel text
//!   `No new command`
//! - a plain object with snake_case task fields
//!
//! [`RawReply::classify`] names the shape once, and the rest of the module
//! works on a flat field map. Field lookups follow the webhook's loose
//! conventions: `null`, `""`, `false` and `0` all count as absent.

use jarvis_core::entities::Task;
use jarvis_core::enums::{Priority, TaskStatus};
use jarvis_core::ids::{gen_task_id, now_iso};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::WebhookError;

/// Sentinel the workflow returns when the input held no instruction.
pub const NO_COMMAND_SENTINEL: &str = "No new command";

/// Chat reply used when the webhook does not send its own.
pub const DEFAULT_CHAT_RESPONSE: &str = "Task added successfully";

type Payload = Map<String, Value>;

// ── Decode ─────────────────────────────────────────────────────────

/// The shape of a raw webhook reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawReply<'a> {
    /// Envelope with a non-empty string at `content.parts[0].text`.
    Envelope(&'a str),
    /// A JSON string.
    Bare(&'a str),
    /// Any other JSON object, used directly as the task payload.
    Object(&'a Payload),
    /// `null`, numbers, booleans, arrays.
    Other,
}

impl<'a> RawReply<'a> {
    #[must_use]
    pub fn classify(raw: &'a Value) -> Self {
        match raw {
            Value::Object(map) => envelope_text(raw).map_or(Self::Object(map), Self::Envelope),
            Value::String(text) => Self::Bare(text),
            _ => Self::Other,
        }
    }
}

fn envelope_text(raw: &Value) -> Option<&str> {
    raw.get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

/// Whether the reply text is the remote's "nothing to do" sentinel.
#[must_use]
pub fn is_no_command(text: &str) -> bool {
    text.trim() == NO_COMMAND_SENTINEL
        || text
            .to_lowercase()
            .contains(&NO_COMMAND_SENTINEL.to_lowercase())
}

// ── Create ─────────────────────────────────────────────────────────

/// A task built from a creation reply, plus the assistant's chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedTask {
    pub task: Task,
    pub chat_message: String,
}

/// Normalize the reply of the task-creation webhook.
///
/// `user_input` is the text the user submitted; it becomes the task text
/// when the payload carries none.
///
/// # Errors
///
/// - [`WebhookError::NoActionableCommand`] when the reply is the sentinel.
/// - [`WebhookError::UnparsableCommand`] when an envelope's inner text is not
///   valid JSON.
pub fn normalize_create_response(
    raw: &Value,
    user_input: &str,
) -> Result<CreatedTask, WebhookError> {
    let payload = match RawReply::classify(raw) {
        RawReply::Envelope(text) => {
            if is_no_command(text) {
                return Err(WebhookError::NoActionableCommand);
            }
            match serde_json::from_str::<Value>(text) {
                Ok(parsed) => into_payload(parsed),
                Err(error) => {
                    tracing::warn!(%error, "envelope text is not valid JSON");
                    return Err(WebhookError::UnparsableCommand);
                }
            }
        }
        RawReply::Bare(text) => {
            if is_no_command(text) {
                return Err(WebhookError::NoActionableCommand);
            }
            serde_json::from_str::<Value>(text).map_or_else(
                |error| {
                    tracing::debug!(%error, "bare reply is not JSON; using input text");
                    Payload::new()
                },
                into_payload,
            )
        }
        RawReply::Object(map) => map.clone(),
        RawReply::Other => {
            tracing::debug!("reply is neither object nor string; using defaults");
            Payload::new()
        }
    };

    let task = build_task(
        &payload,
        &TaskDefaults {
            text: user_input,
            due_keys: &["due_timestamp", "due_date", "dueDate"],
        },
    );
    let chat_message =
        truthy_string(&payload, "chat_response").unwrap_or_else(|| DEFAULT_CHAT_RESPONSE.into());

    Ok(CreatedTask { task, chat_message })
}

fn into_payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

// ── List ───────────────────────────────────────────────────────────

/// Normalize the reply of the task-listing webhook.
///
/// Anything other than an array is an empty list. Every element yields a task,
/// in input order, even when the element is `null` or not an object; the
/// caller replaces its whole list with the result.
#[must_use]
pub fn normalize_list_response(raw: &Value) -> Vec<Task> {
    let Some(items) = raw.as_array() else {
        tracing::debug!("task list reply is not an array; treating as empty");
        return Vec::new();
    };

    let defaults = TaskDefaults {
        text: "",
        due_keys: &["due_date", "dueDate"],
    };
    let empty = Payload::new();
    items
        .iter()
        .map(|item| build_task(item.as_object().unwrap_or(&empty), &defaults))
        .collect()
}

// ── Field extraction ───────────────────────────────────────────────

struct TaskDefaults<'a> {
    text: &'a str,
    due_keys: &'a [&'a str],
}

fn build_task(payload: &Payload, defaults: &TaskDefaults<'_>) -> Task {
    Task {
        id: first_truthy(payload, &["id", "row_number"]).unwrap_or_else(gen_task_id),
        text: truthy_string(payload, "text").unwrap_or_else(|| defaults.text.to_string()),
        parsed_command: first_truthy(payload, &["parsed_command", "parsedCommand"])
            .unwrap_or_default(),
        status: TaskStatus::from_remote(truthy_string(payload, "status").as_deref()),
        created_at: first_truthy(payload, &["created_at", "createdAt"]).unwrap_or_else(now_iso),
        due_date: first_truthy(payload, defaults.due_keys),
        priority: Priority::from_remote(payload.get("priority").and_then(Value::as_str)),
        reminder_sent: false,
    }
}

fn first_truthy(payload: &Payload, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| truthy_string(payload, key))
}

/// A field as a string, when it holds a non-empty string or a non-zero number.
fn truthy_string(payload: &Payload, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}
