//! Error types for the conversion gateway client.

use thiserror::Error;

/// Coarse classification of a failure, used for display and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was made.
    Validation,
    /// The request never produced an HTTP response.
    Network,
    /// The backend answered, but not with a usable success response.
    Server,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Network => "network_error",
            ErrorKind::Server => "server_error",
        }
    }
}

/// Errors that can occur while talking to the conversion backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, TLS or timeout failure.
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend returned a non-success status.
    #[error("Server error from '{endpoint}': {status} - {message}")]
    Server {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// Response body was not the expected envelope.
    #[error("Unexpected response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },

    /// Endpoint URL could not be built.
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Network { .. } | GatewayError::InvalidUrl { .. } => ErrorKind::Network,
            GatewayError::Server { .. } | GatewayError::Decode { .. } => ErrorKind::Server,
        }
    }

    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
