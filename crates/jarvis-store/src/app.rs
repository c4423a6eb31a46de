//! Typed access to the persisted assistant state.
//!
//! Every value is stored as JSON under a fixed key. A value that no longer
//! decodes is logged and treated as absent: the assistant starts with an empty
//! list rather than refusing to start.

use jarvis_core::entities::{ChatMessage, Task};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage keys.
pub mod keys {
    pub const TASKS: &str = "tasks";
    pub const MESSAGES: &str = "messages";
    pub const WEBHOOK_URL: &str = "webhook_url";
    pub const DISCORD_ENABLED: &str = "discord_enabled";

    pub const ALL: [&str; 4] = [TASKS, MESSAGES, WEBHOOK_URL, DISCORD_ENABLED];
}

/// Typed wrapper over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct AppStorage<S> {
    store: S,
}

impl<S: KeyValueStore> AppStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Last-known task list; empty when absent or unreadable.
    pub fn load_tasks(&self) -> Vec<Task> {
        self.read(keys::TASKS).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the list cannot be encoded or written.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        self.write(keys::TASKS, &tasks)
    }

    /// Conversation log in chronological order; empty when absent or unreadable.
    pub fn load_messages(&self) -> Vec<ChatMessage> {
        self.read(keys::MESSAGES).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the log cannot be encoded or written.
    pub fn save_messages(&self, messages: &[ChatMessage]) -> Result<(), StoreError> {
        self.write(keys::MESSAGES, &messages)
    }

    /// The saved webhook base URL, if a non-blank one was saved.
    pub fn webhook_url(&self) -> Option<String> {
        self.read::<String>(keys::WEBHOOK_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }

    /// Save the webhook base URL. A blank URL clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    pub fn set_webhook_url(&self, url: &str) -> Result<(), StoreError> {
        let url = url.trim();
        if url.is_empty() {
            self.store.remove(keys::WEBHOOK_URL)
        } else {
            self.write(keys::WEBHOOK_URL, &url)
        }
    }

    pub fn discord_enabled(&self) -> bool {
        self.read(keys::DISCORD_ENABLED).unwrap_or(false)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    pub fn set_discord_enabled(&self, enabled: bool) -> Result<(), StoreError> {
        self.write(keys::DISCORD_ENABLED, &enabled)
    }

    /// Remove every key this wrapper owns.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] hit; keys before it are already gone.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read persisted value; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "persisted value is corrupted; treating as absent");
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileStore, MemoryStore};
    use jarvis_core::enums::{Priority, TaskStatus};
    use pretty_assertions::assert_eq;

    fn sample_task(id: &str) -> Task {
        Task {
            id: id.into(),
            text: "buy milk".into(),
            parsed_command: "Buy milk".into(),
            status: TaskStatus::Pending,
            created_at: "2024-01-01T00:00:00.000Z".into(),
            due_date: None,
            priority: Priority::Low,
            reminder_sent: false,
        }
    }

    #[test]
    fn empty_store_yields_defaults() {
        let storage = AppStorage::new(MemoryStore::new());
        assert!(storage.load_tasks().is_empty());
        assert!(storage.load_messages().is_empty());
        assert_eq!(storage.webhook_url(), None);
        assert!(!storage.discord_enabled());
    }

    #[test]
    fn tasks_and_messages_roundtrip() {
        let storage = AppStorage::new(MemoryStore::new());
        let tasks = vec![sample_task("1"), sample_task("2")];
        storage.save_tasks(&tasks).unwrap();
        assert_eq!(storage.load_tasks(), tasks);

        let messages = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        storage.save_messages(&messages).unwrap();
        assert_eq!(storage.load_messages(), messages);
    }

    #[test]
    fn corrupted_value_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(keys::TASKS, "{not json").unwrap();
        store.set(keys::DISCORD_ENABLED, "\"maybe\"").unwrap();
        let storage = AppStorage::new(store);
        assert!(storage.load_tasks().is_empty());
        assert!(!storage.discord_enabled());
    }

    #[test]
    fn blank_webhook_url_clears_setting() {
        let storage = AppStorage::new(MemoryStore::new());
        storage.set_webhook_url(" https://hooks.example.com ").unwrap();
        assert_eq!(
            storage.webhook_url().as_deref(),
            Some("https://hooks.example.com")
        );
        storage.set_webhook_url("  ").unwrap();
        assert_eq!(storage.webhook_url(), None);
    }

    #[test]
    fn clear_all_removes_every_key() {
        let store = MemoryStore::new();
        let storage = AppStorage::new(store.clone());
        storage.save_tasks(&[sample_task("1")]).unwrap();
        storage.save_messages(&[ChatMessage::user("hi")]).unwrap();
        storage.set_webhook_url("https://x.test").unwrap();
        storage.set_discord_enabled(true).unwrap();
        assert_eq!(store.len(), 4);

        storage.clear_all().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn file_backed_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        AppStorage::new(FileStore::new(dir.path()))
            .set_discord_enabled(true)
            .unwrap();
        let reopened = AppStorage::new(FileStore::new(dir.path()));
        assert!(reopened.discord_enabled());
    }
}
