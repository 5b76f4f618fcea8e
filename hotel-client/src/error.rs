//! Client error types

use thiserror::Error;

use crate::storage::StorageError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// reqwest failure: transport, or a body that could not be decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        /// Server error code, when the body carried one
        code: Option<u16>,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request never got a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_and_status() {
        let err = ClientError::Api {
            status: 404,
            code: Some(4001),
            message: "Booking not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Booking not found (HTTP 404)");
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = ClientError::InvalidResponse("empty body".to_string());
        assert_eq!(err.status(), None);
    }
}
