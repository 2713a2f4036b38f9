//! Backend error taxonomy.
//!
//! Exactly two failure kinds exist at the backend boundary, and each one
//! maps to a fixed line rendered as the assistant's reply for the failed
//! turn. Keeping them as enum variants (rather than raw strings) keeps the
//! taxonomy extensible without touching the rendering layer.

use thiserror::Error;

/// Fallback line shown when the backend could not be reached at all.
pub const UNREACHABLE_FALLBACK: &str =
    "Error: Could not connect to the neural core. (Is the backend running?)";

/// Fallback line shown when the turn failed after the request went through.
pub const CRITICAL_FALLBACK: &str = "Critical error: connection to the mainframe severed.";

/// Errors from the chat backend boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a usable response: transport failure or
    /// an error status from the backend. Recoverable by resubmitting.
    #[error("backend unreachable: {reason}")]
    Unreachable { reason: String },

    /// The request completed but the turn still failed, e.g. a body that is
    /// not JSON or lacks the reply field.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl BackendError {
    /// The fixed line rendered as the assistant's reply when this error
    /// ends a turn.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            BackendError::Unreachable { .. } => UNREACHABLE_FALLBACK,
            BackendError::Unexpected(_) => CRITICAL_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = BackendError::Unreachable {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = BackendError::Unexpected("missing field".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_fallback_texts_are_distinct() {
        let unreachable = BackendError::Unreachable {
            reason: String::new(),
        };
        let unexpected = BackendError::Unexpected(String::new());
        assert_ne!(unreachable.fallback_text(), unexpected.fallback_text());
        assert_eq!(unreachable.fallback_text(), UNREACHABLE_FALLBACK);
        assert_eq!(unexpected.fallback_text(), CRITICAL_FALLBACK);
    }
}
