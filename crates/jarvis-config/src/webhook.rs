//! Webhook connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    20
}

const fn default_probe_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Base URL of the automation webhook. Empty means "not configured"; a URL
    /// saved with `jarvis settings set-url` takes precedence.
    #[serde(default)]
    pub url: String,

    /// Bound on every regular webhook call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bound on the connection-test probe, in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}

impl WebhookConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = WebhookConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn whitespace_url_is_not_configured() {
        let config = WebhookConfig {
            url: "   ".into(),
            ..WebhookConfig::default()
        };
        assert!(!config.is_configured());
    }
}
