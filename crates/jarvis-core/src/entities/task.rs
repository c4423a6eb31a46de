use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// One actionable item known to the assistant.
///
/// Timestamps are kept as the ISO-8601 strings the webhook sent so that a task
/// read back from storage or re-fetched from the remote compares equal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub parsed_command: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub reminder_sent: bool,
}

impl Task {
    /// Text to show for the task: the interpreted command when there is one,
    /// otherwise what the user typed.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.parsed_command.is_empty() {
            &self.text
        } else {
            &self.parsed_command
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
