//! Error types for document persistence
//!
//! Storage failures are surfaced to the user and leave session state
//! unchanged. Dialog cancellation is not an error; it is reported as
//! `SaveOutcome::Cancelled` by the session operations.

use std::io;

/// Errors raised by document load/save operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Open target does not exist
    NotFound,
    /// Read or write failure
    Io(String),
}

impl SessionError {
    /// Get a user-friendly message for the status bar or a message box
    pub fn user_message(&self, doc_name: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", doc_name),
            Self::Io(msg) => format!("Error saving or opening {}: {}", doc_name, msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::Io(msg) => write!(f, "i/o error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Io(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_io_error() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(SessionError::from(err), SessionError::NotFound);
    }

    #[test]
    fn test_other_io_errors_keep_message() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match SessionError::from(err) {
            SessionError::Io(msg) => assert!(msg.contains("denied")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_user_message_includes_document_name() {
        let msg = SessionError::NotFound.user_message("report.html");
        assert!(msg.contains("report.html"));
    }
}
