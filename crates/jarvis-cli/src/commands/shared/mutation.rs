use jarvis_webhook::WebhookError;

/// Wrap a failed status change or deletion. A transport failure has already
/// triggered a full re-fetch, so the message says the list was restored.
pub fn mutation_error(error: WebhookError, action: &str, id: &str) -> anyhow::Error {
    let refreshed = error.is_transport();
    let error = anyhow::Error::from(error);
    if refreshed {
        error.context(format!(
            "failed to {action} task '{id}'; the task list was re-fetched from the webhook"
        ))
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use jarvis_webhook::WebhookError;

    use super::mutation_error;

    #[test]
    fn transport_failure_mentions_refetch() {
        let error = mutation_error(
            WebhookError::Transport {
                message: "Network Error".into(),
            },
            "delete",
            "task-1",
        );
        assert_eq!(
            format!("{error:#}"),
            "failed to delete task 'task-1'; the task list was re-fetched from the webhook: Network Error"
        );
    }

    #[test]
    fn not_configured_passes_through() {
        let error = mutation_error(WebhookError::NotConfigured, "update", "task-1");
        assert_eq!(error.to_string(), WebhookError::NotConfigured.to_string());
    }
}
