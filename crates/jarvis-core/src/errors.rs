//! Cross-cutting error types for Jarvis.
//!
//! Domain-specific errors (`WebhookError`, `StoreError`, `ConfigError`) live in
//! their respective crates and converge into `anyhow` in `jarvis-cli`.

use thiserror::Error;

/// Errors that can be raised by any Jarvis crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, empty input).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn validation_error_displays_its_reason() {
        let err = CoreError::Validation("unknown task status 'x'".into());
        assert_eq!(err.to_string(), "Validation error: unknown task status 'x'");
    }
}
