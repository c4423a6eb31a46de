//! Status, priority, and sender enums for Jarvis.
//!
//! Every enum here is a closed set. Remote payloads are loosely typed, so the
//! `from_remote` constructors fold whatever the webhook sends into one of the
//! known variants instead of failing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending → in-progress → done
/// ```
///
/// Any status may be set from any other; the remote workflow owns the
/// lifecycle, the client only mirrors it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(alias = "in_progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Fold a status string from a webhook payload into the closed set.
    ///
    /// Unknown or absent values become [`TaskStatus::Pending`].
    #[must_use]
    pub fn from_remote(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(CoreError::Validation(format!(
                "unknown task status '{other}' (expected pending, in-progress or done)"
            ))),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task.
///
/// The webhook speaks a slightly different vocabulary (`normal`, `urgent`);
/// [`Priority::from_remote`] folds it into these three values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Fold a remote priority value into the closed set.
    ///
    /// `normal` → medium, `high`/`urgent` → high, `low` → low. Anything else,
    /// including an absent value, is medium.
    #[must_use]
    pub fn from_remote(raw: Option<&str>) -> Self {
        match raw {
            Some("low") => Self::Low,
            Some("high" | "urgent") => Self::High,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sender
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    /// Older conversation logs call the assistant `jarvis`.
    #[serde(alias = "jarvis")]
    Assistant,
}

impl Sender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Priority::Medium)]
    #[case(Some("normal"), Priority::Medium)]
    #[case(Some("medium"), Priority::Medium)]
    #[case(Some("high"), Priority::High)]
    #[case(Some("urgent"), Priority::High)]
    #[case(Some("low"), Priority::Low)]
    #[case(Some("critical"), Priority::Medium)]
    #[case(Some(""), Priority::Medium)]
    fn priority_folding(#[case] raw: Option<&str>, #[case] expected: Priority) {
        assert_eq!(Priority::from_remote(raw), expected);
    }

    #[rstest]
    #[case(None, TaskStatus::Pending)]
    #[case(Some("pending"), TaskStatus::Pending)]
    #[case(Some("in-progress"), TaskStatus::InProgress)]
    #[case(Some("in_progress"), TaskStatus::InProgress)]
    #[case(Some("done"), TaskStatus::Done)]
    #[case(Some("archived"), TaskStatus::Pending)]
    fn status_from_remote(#[case] raw: Option<&str>, #[case] expected: TaskStatus) {
        assert_eq!(TaskStatus::from_remote(raw), expected);
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: TaskStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let err = "blocked".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("unknown task status 'blocked'"));
    }

    #[test]
    fn legacy_sender_alias_reads_as_assistant() {
        let sender: Sender = serde_json::from_str("\"jarvis\"").unwrap();
        assert_eq!(sender, Sender::Assistant);
        assert_eq!(serde_json::to_string(&sender).unwrap(), "\"assistant\"");
    }
}
