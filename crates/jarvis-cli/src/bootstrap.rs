use std::path::PathBuf;

use anyhow::Context;
use jarvis_config::JarvisConfig;
use jarvis_store::{AppStorage, FileStore, KeyValueStore};
use jarvis_webhook::{WebhookClient, WebhookError};

use crate::assistant::Assistant;
use crate::cli::GlobalFlags;

/// The assistant as the binary runs it.
pub type App = Assistant<WebhookClient, FileStore>;

pub fn load_config() -> anyhow::Result<JarvisConfig> {
    JarvisConfig::load_with_dotenv().context("failed to load jarvis configuration")
}

/// Open the persisted state and, when a URL is known, the webhook client.
pub fn open_assistant(config: &JarvisConfig, flags: &GlobalFlags) -> anyhow::Result<App> {
    let store = open_store(config, flags)?;
    tracing::debug!(dir = %store.dir().display(), "using data directory");

    let storage = AppStorage::new(store);
    let url = resolve_webhook_url(&storage, config);
    let backend = match url.as_deref().map(|url| build_client(url, config)) {
        Some(Ok(client)) => Some(client),
        Some(Err(error)) => {
            tracing::warn!(%error, "ignoring unusable webhook URL");
            None
        }
        None => None,
    };

    Ok(Assistant::open(backend, storage))
}

/// Data directory precedence: `--data-dir`, then `general.data_dir`, then the
/// platform default.
pub fn open_store(config: &JarvisConfig, flags: &GlobalFlags) -> anyhow::Result<FileStore> {
    if let Some(dir) = flags.data_dir.as_deref().filter(|dir| !dir.trim().is_empty()) {
        return Ok(FileStore::new(PathBuf::from(dir)));
    }
    if let Some(dir) = config.data_dir() {
        return Ok(FileStore::new(dir));
    }
    FileStore::default_location().context("failed to locate a data directory; pass --data-dir")
}

/// A URL saved with `settings set-url` wins over the configured one.
pub fn resolve_webhook_url<S: KeyValueStore>(
    storage: &AppStorage<S>,
    config: &JarvisConfig,
) -> Option<String> {
    storage.webhook_url().or_else(|| {
        config
            .webhook
            .is_configured()
            .then(|| config.webhook.url.trim().to_string())
    })
}

/// Build a client honoring the configured timeouts.
pub fn build_client(url: &str, config: &JarvisConfig) -> Result<WebhookClient, WebhookError> {
    WebhookClient::with_timeouts(
        url,
        config.webhook.timeout(),
        config.webhook.probe_timeout(),
    )
}
