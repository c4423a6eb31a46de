//! # jarvis-webhook
//!
//! HTTP client for the task automation webhook, and the normalization of its
//! replies into [`jarvis_core::Task`] records.
//!
//! Endpoints, relative to a user-supplied base URL:
//! - `POST /add-task?message=<text>` - create a task from free text
//! - `GET /tasks` - list tasks (also the connection probe)
//! - `POST /update-task` - `{id, status}`
//! - `DELETE /delete-task` - `{taskId}`

mod client;
mod error;
mod http;
pub mod normalize;

pub use client::{DEFAULT_PROBE_TIMEOUT, DEFAULT_TIMEOUT, TaskBackend, WebhookClient};
pub use error::WebhookError;
pub use normalize::{CreatedTask, RawReply, normalize_create_response, normalize_list_response};
