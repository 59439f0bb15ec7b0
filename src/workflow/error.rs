use std::fmt;

use crate::api::{ErrorKind, GatewayError};

/// Error held in the workflow state and shown to the user.
///
/// Unlike [`GatewayError`] this is clonable so it can live inside a
/// reducer-owned state; the transport error is kept as its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowError {
    pub kind: ErrorKind,
    pub message: String,
}

impl WorkflowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// A gateway call that ended without an outcome (its task panicked).
    pub fn aborted(operation: &str) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: format!("{} was interrupted before completing", operation),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for WorkflowError {}

impl From<GatewayError> for WorkflowError {
    fn from(err: GatewayError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<&GatewayError> for WorkflowError {
    fn from(err: &GatewayError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
