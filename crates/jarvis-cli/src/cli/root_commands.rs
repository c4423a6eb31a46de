use clap::{Args, Subcommand};

use crate::cli::subcommands::SettingsCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Send a free-text command to the assistant.
    Send(SendArgs),
    /// Show tasks.
    Tasks(TasksArgs),
    /// Fetch the task list from the webhook, replacing the local copy.
    Refresh,
    /// Change a task's status.
    Status(StatusArgs),
    /// Delete a task.
    Delete(DeleteArgs),
    /// Show the conversation log.
    History(HistoryArgs),
    /// Webhook URL and notification settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Clear all persisted tasks, messages, and settings.
    Reset(ResetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SendArgs {
    /// What you want done, e.g. "remind me to call John at 3pm".
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl SendArgs {
    #[must_use]
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct TasksArgs {
    /// Only show tasks with this status (pending, in-progress, done).
    #[arg(long)]
    pub status: Option<String>,
    /// Fetch from the webhook before showing.
    #[arg(long)]
    pub refresh: bool,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    pub id: String,
    /// New status: pending, in-progress, or done.
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Show the most recent N messages.
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ResetArgs {
    /// Confirm that everything should be removed.
    #[arg(long)]
    pub yes: bool,
}
