use clap::{Subcommand, ValueEnum};

/// On/off switch for boolean settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    #[must_use]
    pub const fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the effective settings.
    Show,
    /// Save the webhook base URL. An empty string clears it.
    SetUrl { url: String },
    /// Turn Discord notifications on or off.
    Discord { state: Toggle },
    /// Check that the webhook answers. Saves `url` first when given.
    Test { url: Option<String> },
}
