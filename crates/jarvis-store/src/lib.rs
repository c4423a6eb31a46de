//! # jarvis-store
//!
//! Persistence for the assistant's state: the last-known task list, the
//! conversation log, the webhook URL, and the Discord notification flag.
//!
//! The storage medium is a plain key-value contract ([`KeyValueStore`]), with
//! a file-per-key implementation for the CLI and an in-memory one for tests.
//! [`AppStorage`] layers typed, JSON-encoded access on top.

mod app;
mod error;
mod kv;

pub use app::{AppStorage, keys};
pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
