//! Transport error for the user directory client
//!
//! There is a single failure kind: the request could not be completed,
//! either because the network call failed or because the remote answered
//! with a non-success status. Status codes are not interpreted beyond that.

use thiserror::Error;

/// Error raised when a directory lookup cannot be completed
///
/// Always carries a human-readable message, so consumers can surface it
/// verbatim without inspecting the failure further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Create an error from a message
    ///
    /// An empty message is replaced with a generic one so the error is
    /// always displayable.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "user directory request failed".to_string()
        } else {
            message
        };

        Self { message }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<octocrab::Error> for TransportError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            // Non-success responses carry the API's own message (e.g. "Not Found")
            octocrab::Error::GitHub { source, .. } => Self::new(source.message),
            other => Self::new(other.to_string()),
        }
    }
}
