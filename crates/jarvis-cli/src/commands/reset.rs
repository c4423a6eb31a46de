use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResetArgs;
use crate::commands::shared::notify::notice;

/// Handle `jarvis reset`.
pub fn handle(args: &ResetArgs, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!(
            "reset clears every cached task and saved setting; re-run with --yes"
        );
    }
    app.storage().clear_all()?;
    tracing::info!(dir = %app.storage().store().dir().display(), "persisted state cleared");
    notice(flags, "All local data cleared.");
    Ok(())
}
