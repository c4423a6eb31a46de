use jarvis_config::JarvisConfig;

use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::output::output_rows;

/// Handle `jarvis history`: the most recent messages, oldest first.
pub fn handle(
    args: &HistoryArgs,
    app: &App,
    config: &JarvisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = as_len(effective_limit(
        args.limit,
        flags.limit,
        config.general.default_limit,
    ));
    let messages = app.messages();
    let start = messages.len().saturating_sub(limit);
    output_rows(&messages[start..], flags.format)
}
