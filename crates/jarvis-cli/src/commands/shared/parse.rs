use anyhow::Context;
use jarvis_core::enums::TaskStatus;

/// Parse a user-supplied status. Accepts `in-progress`, `in_progress`, and
/// any letter case.
pub fn parse_status(raw: &str) -> anyhow::Result<TaskStatus> {
    raw.trim()
        .to_ascii_lowercase()
        .parse::<TaskStatus>()
        .with_context(|| format!("invalid status '{raw}'"))
}
