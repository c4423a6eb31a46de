//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a key's backing file failed.
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key names map to file names, so they are restricted.
    #[error("invalid store key '{0}': use ASCII letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// No data directory could be determined for the default store.
    #[error("no data directory available; pass --data-dir or set JARVIS_GENERAL__DATA_DIR")]
    NoDataDir,
}
