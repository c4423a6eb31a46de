use serde::Serialize;

use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::mutation::mutation_error;
use crate::commands::shared::notify::{notice, warning};
use crate::commands::shared::parse::parse_status;
use crate::output::{output_record, output_rows};

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    id: &'a str,
    status: &'static str,
}

/// Handle `jarvis status`.
pub async fn handle(args: &StatusArgs, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_status(&args.status)?;
    if !app.tasks().iter().any(|task| task.id == args.id) {
        warning(
            flags,
            &format!("task '{}' is not in the local list; sending anyway", args.id),
        );
    }

    app.update_status(&args.id, status)
        .await
        .map_err(|error| mutation_error(error, "update", &args.id))?;

    notice(flags, "Task updated!");
    match app.tasks().iter().find(|task| task.id == args.id) {
        Some(task) => output_rows(&[task], flags.format),
        None => output_record(
            &StatusReport {
                id: &args.id,
                status: status.as_str(),
            },
            flags.format,
        ),
    }
}
