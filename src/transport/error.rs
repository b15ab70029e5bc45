//! Error types for the transport layer.

use thiserror::Error;

/// Errors that can occur while talking to the report API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request URL could not be built
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the API
    #[error("Connection failed to '{url}': {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API answered with a non-success status
    #[error("API error: {status} for '{url}'")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            TransportError::ClientBuild(_) => "client_build",
            TransportError::InvalidUrl { .. } => "invalid_url",
            TransportError::ConnectionError { .. } => "connection_error",
            TransportError::Status { .. } => "status_error",
            TransportError::Decode(_) => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TransportError::Status {
            status: 503,
            url: "https://api.example/quarterly_foia_report".to_string(),
        };
        assert_eq!(err.error_type(), "status_error");
        assert_eq!(
            err.to_string(),
            "API error: 503 for 'https://api.example/quarterly_foia_report'"
        );
    }

    #[test]
    fn test_decode_error_type() {
        let err = TransportError::Decode("bad".to_string());
        assert_eq!(err.error_type(), "decode_error");
    }
}
