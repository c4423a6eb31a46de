//! Webhook error types.
//!
//! Every variant renders as a message fit to show the user as-is; callers
//! display it and only branch on [`WebhookError::is_transport`] to decide
//! whether an optimistic local edit needs a corrective refresh.

use thiserror::Error;

/// Errors that can occur when talking to the automation webhook or
/// interpreting its replies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// No webhook base URL is configured; nothing was sent.
    #[error("webhook URL not configured. Set it with 'jarvis settings set-url <url>'.")]
    NotConfigured,

    /// The configured base URL is not an http(s) URL.
    #[error("invalid webhook URL '{0}': expected an http:// or https:// address")]
    InvalidUrl(String),

    /// The remote understood the input but found no instruction in it.
    #[error("Please enter a valid instruction or task. JARVIS needs a clear command to help you!")]
    NoActionableCommand,

    /// The remote replied, but its output could not be interpreted.
    #[error("Unable to understand the command. Please try rephrasing your request.")]
    UnparsableCommand,

    /// Network failure, timeout, or a non-success response.
    #[error("{message}")]
    Transport {
        /// The remote's own error message when it sent one.
        message: String,
    },
}

impl WebhookError {
    /// Build a transport failure, substituting `fallback` for an empty message.
    #[must_use]
    pub fn transport(message: impl Into<String>, fallback: &str) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        Self::Transport { message }
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
