//! # jarvis-config
//!
//! Layered configuration loading for Jarvis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JARVIS_*` prefix, `__` as separator)
//! 2. Project-level `.jarvis/config.toml`
//! 3. User-level `~/.config/jarvis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JARVIS_WEBHOOK__URL` -> `webhook.url`,
//! `JARVIS_GENERAL__DATA_DIR` -> `general.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use jarvis_config::JarvisConfig;
//!
//! let config = JarvisConfig::load_with_dotenv().expect("config");
//! if config.webhook.is_configured() {
//!     println!("Webhook: {}", config.webhook.url);
//! }
//! ```

mod error;
mod general;
mod webhook;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use webhook::WebhookConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JarvisConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl JarvisConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`JarvisConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`JarvisConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".jarvis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("JARVIS_").split("__"))
    }

    /// Check values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero timeouts or a zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "webhook.timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        if self.webhook.probe_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "webhook.probe_timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Configured data directory, if one was set.
    #[must_use]
    pub fn data_dir(&self) -> Option<PathBuf> {
        let dir = self.general.data_dir.trim();
        (!dir.is_empty()).then(|| PathBuf::from(dir))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jarvis").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = JarvisConfig::default();
        assert!(!config.webhook.is_configured());
        assert!(config.data_dir().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: JarvisConfig = JarvisConfig::figment().extract()?;
            assert!(!config.webhook.is_configured());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = JarvisConfig::default();
        config.webhook.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("webhook.timeout_secs"));
    }
}
