use serde::Serialize;

use crate::assistant::SyncOutcome;
use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::commands::shared::notify::{notice, warning};
use crate::output::output_record;

#[derive(Debug, Serialize)]
struct RefreshReport {
    tasks: usize,
}

/// Handle `jarvis refresh`.
pub async fn handle(app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let count = app.refresh().await?;
    notice(flags, "Tasks refreshed!");
    output_record(&RefreshReport { tasks: count }, flags.format)
}

/// Fetch before showing cached data. Failures only warn; the cached list is
/// still shown.
pub async fn sync_or_warn(app: &mut App, flags: &GlobalFlags) {
    match app.sync().await {
        SyncOutcome::Synced { count } => {
            tracing::debug!(count, "task list refreshed");
        }
        SyncOutcome::NeedsSetup => warning(
            flags,
            "webhook URL not configured; showing cached tasks. Set it with 'jarvis settings set-url <url>'.",
        ),
        SyncOutcome::Degraded { error } => {
            warning(flags, &format!("{error}; showing cached tasks"));
        }
    }
}
