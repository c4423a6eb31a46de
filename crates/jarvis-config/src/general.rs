//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding persisted tasks, messages, and settings. Empty means
    /// the platform data directory.
    #[serde(default)]
    pub data_dir: String,

    /// Default row limit for `tasks` and `history`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.data_dir.is_empty());
        assert_eq!(config.default_limit, 20);
    }
}
