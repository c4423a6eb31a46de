use serde::Serialize;

use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::mutation::mutation_error;
use crate::commands::shared::notify::notice;
use crate::output::output_record;

#[derive(Debug, Serialize)]
struct DeleteReport<'a> {
    deleted: &'a str,
    remaining: usize,
}

/// Handle `jarvis delete`.
pub async fn handle(args: &DeleteArgs, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    app.delete_task(&args.id)
        .await
        .map_err(|error| mutation_error(error, "delete", &args.id))?;

    notice(flags, "Task deleted!");
    output_record(
        &DeleteReport {
            deleted: &args.id,
            remaining: app.tasks().len(),
        },
        flags.format,
    )
}
