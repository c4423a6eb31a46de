//! Shared HTTP response helpers for the webhook client.
//!
//! Centralizes status-code checks, error-message extraction, and body decoding
//! so the client methods stay focused on request construction.

use serde_json::Value;

use crate::error::WebhookError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the failure carries
/// the body's `message` field when the webhook sent one, else
/// `Request failed with status code N`.
pub async fn check_response(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, WebhookError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message_from_body(&body)
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
    tracing::debug!(status = status.as_u16(), %message, "webhook returned an error status");
    Err(WebhookError::transport(message, fallback))
}

/// Read a response body as JSON, or as a JSON string when it isn't JSON.
///
/// Webhook nodes that reply with plain text must still reach the normalizer,
/// which handles bare strings.
pub async fn read_body(resp: reqwest::Response, fallback: &str) -> Result<Value, WebhookError> {
    let text = resp
        .text()
        .await
        .map_err(|error| transport_error(&error, fallback))?;
    Ok(decode_body(text))
}

/// Decode a body string: JSON when it parses, the raw text otherwise.
#[must_use]
pub fn decode_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Convert a `reqwest` failure into a transport error.
pub fn transport_error(error: &reqwest::Error, fallback: &str) -> WebhookError {
    if error.is_timeout() {
        return WebhookError::transport("request to the webhook timed out", fallback);
    }
    if error.is_connect() {
        return WebhookError::transport("could not connect to the webhook", fallback);
    }
    WebhookError::transport(error.to_string(), fallback)
}

/// Pull a `message` string out of a JSON error body.
fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp, "Failed").await.is_ok());
    }

    #[tokio::test]
    async fn check_response_uses_remote_message() {
        let resp = mock_response(500, r#"{"message":"Workflow could not be started!"}"#);
        let err = check_response(resp, "Failed to add task").await.unwrap_err();
        assert_eq!(
            err,
            WebhookError::Transport {
                message: "Workflow could not be started!".into()
            }
        );
    }

    #[tokio::test]
    async fn check_response_falls_back_to_status_code() {
        let resp = mock_response(404, "not found");
        let err = check_response(resp, "Failed to fetch tasks").await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[tokio::test]
    async fn read_body_keeps_plain_text_as_string() {
        let resp = mock_response(200, "No new command");
        let body = read_body(resp, "Failed").await.unwrap();
        assert_eq!(body, Value::String("No new command".into()));
    }

    #[tokio::test]
    async fn read_body_parses_json() {
        let resp = mock_response(200, r#"{"id":3}"#);
        let body = read_body(resp, "Failed").await.unwrap();
        assert_eq!(body["id"], 3);
    }

    #[test]
    fn blank_message_field_is_ignored() {
        assert_eq!(error_message_from_body(r#"{"message":"  "}"#), None);
        assert_eq!(error_message_from_body("<html>"), None);
    }
}
