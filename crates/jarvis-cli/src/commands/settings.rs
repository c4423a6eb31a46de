use anyhow::Context;
use jarvis_config::JarvisConfig;
use serde::Serialize;

use crate::bootstrap::{App, build_client, resolve_webhook_url};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::commands::shared::notify::notice;
use crate::output::output_record;

#[derive(Debug, Serialize)]
struct SettingsReport {
    webhook_url: Option<String>,
    url_source: &'static str,
    discord_enabled: bool,
    timeout_secs: u64,
    probe_timeout_secs: u64,
    data_dir: String,
}

#[derive(Debug, Serialize)]
struct ConnectionReport<'a> {
    url: &'a str,
    message: String,
}

/// Handle `jarvis settings`.
pub async fn handle(
    action: &SettingsCommands,
    app: &mut App,
    config: &JarvisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SettingsCommands::Show => output_record(&report(app, config), flags.format),
        SettingsCommands::SetUrl { url } => {
            save_url(app, config, url)?;
            notice(flags, "Settings saved.");
            output_record(&report(app, config), flags.format)
        }
        SettingsCommands::Discord { state } => {
            let url = app.storage().webhook_url().unwrap_or_default();
            app.save_settings(&url, state.enabled())?;
            notice(flags, "Settings saved.");
            output_record(&report(app, config), flags.format)
        }
        SettingsCommands::Test { url } => {
            if let Some(url) = url {
                save_url(app, config, url)?;
            }
            test_connection(app, config, flags).await
        }
    }
}

/// Validate, persist, and switch to a new webhook URL. Blank clears it.
fn save_url(app: &mut App, config: &JarvisConfig, url: &str) -> anyhow::Result<()> {
    let backend = if url.trim().is_empty() {
        None
    } else {
        Some(build_client(url.trim(), config).context("webhook URL was not saved")?)
    };
    let discord_enabled = app.storage().discord_enabled();
    app.save_settings(url, discord_enabled)?;
    app.set_backend(backend);
    Ok(())
}

async fn test_connection(
    app: &App,
    config: &JarvisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let url = resolve_webhook_url(app.storage(), config).unwrap_or_default();
    match app.test_connection().await {
        Ok(()) => {
            notice(flags, "Connection successful!");
            output_record(
                &ConnectionReport {
                    url: &url,
                    message: "Connection successful!".into(),
                },
                flags.format,
            )
        }
        Err(error) => Err(anyhow::Error::from(error).context("connection test failed")),
    }
}

fn report(app: &App, config: &JarvisConfig) -> SettingsReport {
    let saved = app.storage().webhook_url();
    let (webhook_url, url_source) = match saved {
        Some(url) => (Some(url), "saved"),
        None if config.webhook.is_configured() => {
            (Some(config.webhook.url.trim().to_string()), "config")
        }
        None => (None, "unset"),
    };
    SettingsReport {
        webhook_url,
        url_source,
        discord_enabled: app.storage().discord_enabled(),
        timeout_secs: config.webhook.timeout_secs,
        probe_timeout_secs: config.webhook.probe_timeout_secs,
        data_dir: app.storage().store().dir().display().to_string(),
    }
}
