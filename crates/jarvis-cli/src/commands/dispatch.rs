use jarvis_config::JarvisConfig;

use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    app: &mut App,
    config: &JarvisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Send(args) => commands::send::handle(&args, app, flags).await,
        Commands::Tasks(args) => commands::tasks::handle(&args, app, config, flags).await,
        Commands::Refresh => commands::refresh::handle(app, flags).await,
        Commands::Status(args) => commands::status::handle(&args, app, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, app, flags).await,
        Commands::History(args) => commands::history::handle(&args, app, config, flags),
        Commands::Settings { action } => {
            commands::settings::handle(&action, app, config, flags).await
        }
        Commands::Reset(args) => commands::reset::handle(&args, app, flags),
    }
}
