//! The assistant controller: in-memory task list and conversation log, kept in
//! step with the webhook and the persistent store.
//!
//! Every user action maps to one method. Status changes and deletions are
//! applied locally before the webhook call; when the call fails the whole list
//! is re-fetched instead of rolling back the single edit.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use jarvis_core::entities::{ChatMessage, Task};
use jarvis_core::enums::TaskStatus;
use jarvis_store::{AppStorage, KeyValueStore, StoreError};
use jarvis_webhook::{TaskBackend, WebhookError};
use serde::Serialize;

/// Result of the startup fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No webhook URL; only cached data is available.
    NeedsSetup,
    /// The list was replaced with `count` tasks from the webhook.
    Synced { count: usize },
    /// The fetch failed; the cached list is still shown.
    Degraded { error: WebhookError },
}

/// Result of submitting a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SendOutcome {
    /// A task was created; `reply` is the assistant's chat turn.
    Created { task: Task, reply: String },
    /// Nothing was created; `reason` is the assistant's chat turn.
    Rejected { reason: String },
}

pub struct Assistant<B, S> {
    backend: Option<B>,
    storage: AppStorage<S>,
    tasks: Vec<Task>,
    messages: Vec<ChatMessage>,
}

impl<B: TaskBackend, S: KeyValueStore> Assistant<B, S> {
    /// Open the assistant with whatever the store holds, for instant display.
    ///
    /// `backend` is `None` when no webhook URL is configured.
    pub fn open(backend: Option<B>, storage: AppStorage<S>) -> Self {
        let tasks = storage.load_tasks();
        let messages = storage.load_messages();
        tracing::debug!(
            tasks = tasks.len(),
            messages = messages.len(),
            "loaded cached assistant state"
        );
        Self {
            backend,
            storage,
            tasks,
            messages,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub const fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub const fn storage(&self) -> &AppStorage<S> {
        &self.storage
    }

    /// Swap the webhook backend, e.g. after the URL was changed.
    pub fn set_backend(&mut self, backend: Option<B>) {
        self.backend = backend;
    }

    /// Persist the webhook URL and the Discord flag. A blank URL clears it.
    ///
    /// The current backend is left untouched; see [`Assistant::set_backend`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either value cannot be written.
    pub fn save_settings(&self, url: &str, discord_enabled: bool) -> Result<(), StoreError> {
        self.storage.set_webhook_url(url)?;
        self.storage.set_discord_enabled(discord_enabled)?;
        tracing::info!(configured = !url.trim().is_empty(), discord_enabled, "settings saved");
        Ok(())
    }

    fn backend(&self) -> Result<&B, WebhookError> {
        self.backend.as_ref().ok_or(WebhookError::NotConfigured)
    }

    /// Startup fetch. Never fails: a transport error keeps the cached list.
    pub async fn sync(&mut self) -> SyncOutcome {
        if self.backend.is_none() {
            return SyncOutcome::NeedsSetup;
        }
        match self.refresh().await {
            Ok(count) => SyncOutcome::Synced { count },
            Err(error) => {
                tracing::warn!(%error, "startup fetch failed; showing cached tasks");
                SyncOutcome::Degraded { error }
            }
        }
    }

    /// Submit free text. The user turn and the assistant's answer (or the
    /// failure reason) are both appended to the conversation log.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        self.push_message(ChatMessage::user(text));

        let result = match self.backend() {
            Ok(backend) => backend.create_task(text).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(created) => {
                tracing::info!(id = %created.task.id, "task created");
                self.tasks.insert(0, created.task.clone());
                self.persist_tasks();
                self.push_message(ChatMessage::assistant(created.chat_message.clone()));
                SendOutcome::Created {
                    task: created.task,
                    reply: created.chat_message,
                }
            }
            Err(error) => {
                tracing::info!(%error, "message did not produce a task");
                let reason = error.to_string();
                self.push_message(ChatMessage::assistant(reason.clone()));
                SendOutcome::Rejected { reason }
            }
        }
    }

    /// Replace the local list with the webhook's. Returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the fetch fails; the local list is kept.
    pub async fn refresh(&mut self) -> Result<usize, WebhookError> {
        let tasks = self.backend()?.list_tasks().await?;
        self.tasks = tasks;
        self.persist_tasks();
        Ok(self.tasks.len())
    }

    /// Change a task's status, optimistically.
    ///
    /// # Errors
    ///
    /// Returns the webhook's [`WebhookError`]. On a transport failure the list
    /// has already been re-fetched by the time this returns.
    pub async fn update_status(&mut self, id: &str, status: TaskStatus) -> Result<(), WebhookError> {
        if !self.is_configured() {
            return Err(WebhookError::NotConfigured);
        }
        for task in self.tasks.iter_mut().filter(|task| task.id == id) {
            task.status = status;
        }
        self.persist_tasks();
        let result = self.backend()?.update_task_status(id, status).await;
        self.recover_on_failure(result).await
    }

    /// Delete a task, optimistically.
    ///
    /// # Errors
    ///
    /// Same recovery contract as [`Assistant::update_status`].
    pub async fn delete_task(&mut self, id: &str) -> Result<(), WebhookError> {
        if !self.is_configured() {
            return Err(WebhookError::NotConfigured);
        }
        self.tasks.retain(|task| task.id != id);
        self.persist_tasks();
        let result = self.backend()?.delete_task(id).await;
        self.recover_on_failure(result).await
    }

    /// Liveness probe against the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if no webhook is configured or it is unreachable.
    pub async fn test_connection(&self) -> Result<(), WebhookError> {
        self.backend()?.test_connection().await
    }

    /// Tasks in display order: active first, then done; within each group by
    /// due date ascending, undated last.
    pub fn task_view(&self) -> Vec<&Task> {
        let (mut active, mut done): (Vec<&Task>, Vec<&Task>) =
            self.tasks.iter().partition(|task| !task.is_done());
        active.sort_by_key(|task| due_sort_key(task));
        done.sort_by_key(|task| due_sort_key(task));
        active.extend(done);
        active
    }

    async fn recover_on_failure(
        &mut self,
        result: Result<(), WebhookError>,
    ) -> Result<(), WebhookError> {
        let Err(error) = result else {
            return Ok(());
        };
        if error.is_transport() {
            tracing::warn!(%error, "webhook rejected local edit; re-fetching task list");
            if let Err(refresh_error) = self.refresh().await {
                tracing::warn!(%refresh_error, "corrective refresh failed");
            }
        }
        Err(error)
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if let Err(error) = self.storage.save_messages(&self.messages) {
            tracing::warn!(%error, "failed to persist conversation log");
        }
    }

    fn persist_tasks(&self) {
        if let Err(error) = self.storage.save_tasks(&self.tasks) {
            tracing::warn!(%error, "failed to persist task list");
        }
    }
}

/// Undated and unparsable due dates sort after every real date.
fn due_sort_key(task: &Task) -> (bool, Option<DateTime<Utc>>) {
    let due = task.due_date.as_deref().and_then(parse_due);
    (due.is_none(), due)
}

/// Accepts RFC 3339, and ISO-8601 date-times without an offset or plain dates.
/// Values without an offset are read as UTC.
fn parse_due(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
