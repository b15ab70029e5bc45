use std::path::PathBuf;

use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by report actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Caller broke an operation's precondition; nothing was dispatched.
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Data type catalog could not be read or parsed
    #[error("Failed to load data type catalog from {path}: {reason}")]
    Catalog { path: PathBuf, reason: String },

    /// Background task panicked or was aborted
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

impl ActionError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ActionError::InvalidInvocation(_) => "invalid_invocation",
            ActionError::Transport(e) => e.error_type(),
            ActionError::Catalog { .. } => "catalog_error",
            ActionError::TaskFailed(_) => "task_failed",
        }
    }
}
