//! ID prefixes, ID synthesis, and timestamp helpers.
//!
//! Remote tasks usually carry their own `id` (or a spreadsheet `row_number`).
//! When they don't, the client synthesizes `task-<unix millis>-<suffix>` where
//! the suffix is nine random base36 characters. That is unique enough for a
//! single client in a single session.

use chrono::{SecondsFormat, Utc};

pub const PREFIX_TASK: &str = "task";
pub const PREFIX_MESSAGE: &str = "msg";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Synthesize a task ID: `task-<millis>-<suffix>`.
#[must_use]
pub fn gen_task_id() -> String {
    gen_id(PREFIX_TASK)
}

/// Synthesize a chat message ID: `msg-<millis>-<suffix>`.
#[must_use]
pub fn gen_message_id() -> String {
    gen_id(PREFIX_MESSAGE)
}

/// Build `{prefix}-{millis}-{suffix}`.
#[must_use]
pub fn gen_id(prefix: &str) -> String {
    format!(
        "{prefix}-{}-{}",
        Utc::now().timestamp_millis(),
        random_suffix()
    )
}

/// Current time as an ISO-8601 string with millisecond precision, e.g.
/// `2024-01-01T15:00:00.000Z`.
#[must_use]
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn random_suffix() -> String {
    let mut bytes = [0u8; SUFFIX_LEN];
    if getrandom::fill(&mut bytes).is_err() {
        // OS RNG unavailable: fall back to the sub-second clock.
        let nanos = Utc::now().timestamp_subsec_nanos().to_le_bytes();
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = nanos[index % nanos.len()].wrapping_add(u8::try_from(index).unwrap_or(0));
        }
    }
    bytes
        .iter()
        .map(|byte| char::from(BASE36[usize::from(*byte) % BASE36.len()]))
        .collect()
}
