//! HTTP client for the task automation webhook.

use std::time::Duration;

use jarvis_core::entities::Task;
use jarvis_core::enums::TaskStatus;
use serde_json::{Value, json};

use crate::error::WebhookError;
use crate::http::{check_response, read_body, transport_error};
use crate::normalize::{CreatedTask, normalize_create_response, normalize_list_response};

/// Bound on every regular webhook call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
/// Bound on the connection-test probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const ADD_TASK: &str = "/add-task";
const LIST_TASKS: &str = "/tasks";
const UPDATE_TASK: &str = "/update-task";
const DELETE_TASK: &str = "/delete-task";

/// The operations the assistant needs from its remote.
///
/// [`WebhookClient`] is the production implementation; tests substitute a
/// scripted backend.
#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    /// Submit free text and normalize the created task.
    async fn create_task(&self, text: &str) -> Result<CreatedTask, WebhookError>;

    /// Fetch and normalize the full task list.
    async fn list_tasks(&self) -> Result<Vec<Task>, WebhookError>;

    /// Set a task's status. Only transport success matters.
    async fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<(), WebhookError>;

    /// Delete a task. Only transport success matters.
    async fn delete_task(&self, id: &str) -> Result<(), WebhookError>;

    /// Liveness probe.
    async fn test_connection(&self) -> Result<(), WebhookError>;
}

/// HTTP client bound to one webhook base URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    probe_timeout: Duration,
}

impl WebhookClient {
    /// Create a client with the default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::NotConfigured`] for a blank URL and
    /// [`WebhookError::InvalidUrl`] for one that is not http(s).
    pub fn new(base_url: &str) -> Result<Self, WebhookError> {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT, DEFAULT_PROBE_TIMEOUT)
    }

    /// Create a client with explicit request and probe timeouts.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::new`], plus [`WebhookError::Transport`] if the
    /// underlying `reqwest::Client` fails to build.
    pub fn with_timeouts(
        base_url: &str,
        timeout: Duration,
        probe_timeout: Duration,
    ) -> Result<Self, WebhookError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("jarvis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| transport_error(&error, "failed to build HTTP client"))?;
        Ok(Self {
            http,
            base_url,
            timeout,
            probe_timeout,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submit free text and return the reply exactly as the webhook sent it.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] on network failure, timeout, or a
    /// non-success status.
    pub async fn create_task_raw(&self, text: &str) -> Result<Value, WebhookError> {
        const FALLBACK: &str = "Failed to add task";
        let url = format!(
            "{}?message={}",
            self.endpoint(ADD_TASK),
            urlencoding::encode(text)
        );
        tracing::debug!(%url, "submitting task text");
        let resp = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| transport_error(&error, FALLBACK))?;
        read_body(check_response(resp, FALLBACK).await?, FALLBACK).await
    }
}

impl TaskBackend for WebhookClient {
    async fn create_task(&self, text: &str) -> Result<CreatedTask, WebhookError> {
        let raw = self.create_task_raw(text).await?;
        normalize_create_response(&raw, text)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, WebhookError> {
        const FALLBACK: &str = "Failed to fetch tasks";
        let resp = self
            .http
            .get(self.endpoint(LIST_TASKS))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| transport_error(&error, FALLBACK))?;
        let raw = read_body(check_response(resp, FALLBACK).await?, FALLBACK).await?;
        let tasks = normalize_list_response(&raw);
        tracing::debug!(count = tasks.len(), "fetched task list");
        Ok(tasks)
    }

    async fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<(), WebhookError> {
        const FALLBACK: &str = "Failed to update task";
        let resp = self
            .http
            .post(self.endpoint(UPDATE_TASK))
            .timeout(self.timeout)
            .json(&json!({ "id": id, "status": status }))
            .send()
            .await
            .map_err(|error| transport_error(&error, FALLBACK))?;
        check_response(resp, FALLBACK).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), WebhookError> {
        const FALLBACK: &str = "Failed to delete task";
        let resp = self
            .http
            .delete(self.endpoint(DELETE_TASK))
            .timeout(self.timeout)
            .json(&json!({ "taskId": id }))
            .send()
            .await
            .map_err(|error| transport_error(&error, FALLBACK))?;
        check_response(resp, FALLBACK).await?;
        Ok(())
    }

    async fn test_connection(&self) -> Result<(), WebhookError> {
        const FALLBACK: &str = "Connection failed";
        let resp = self
            .http
            .get(self.endpoint(LIST_TASKS))
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|error| transport_error(&error, FALLBACK))?;
        check_response(resp, FALLBACK).await?;
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> Result<String, WebhookError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(WebhookError::NotConfigured);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(WebhookError::InvalidUrl(raw.trim().to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = WebhookClient::new("https://hooks.example.com/webhook/ ").unwrap();
        assert_eq!(client.base_url(), "https://hooks.example.com/webhook");
        assert_eq!(
            client.endpoint(LIST_TASKS),
            "https://hooks.example.com/webhook/tasks"
        );
    }

    #[test]
    fn blank_url_is_not_configured() {
        assert_eq!(
            WebhookClient::new("   ").unwrap_err(),
            WebhookError::NotConfigured
        );
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = WebhookClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_failure() {
        let client = WebhookClient::with_timeouts(
            "http://127.0.0.1:9",
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = client.test_connection().await.unwrap_err();
        assert!(err.is_transport());
    }
}
