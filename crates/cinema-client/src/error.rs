//! Client error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code used when the server did not say what went wrong
pub const GENERIC_ERROR: &str = "unknown_error";

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine readable error code (e.g., "not_found")
    #[serde(default)]
    pub error: String,

    /// Human readable description
    #[serde(default)]
    pub message: String,
}

/// Errors returned by [`crate::CatalogClient`] implementations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {}", .details.error)]
    Status { status: u16, details: ErrorDetails },

    /// The response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, bad body)
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The error code a store should surface to its view
    ///
    /// Server supplied codes win; everything else collapses into
    /// [`GENERIC_ERROR`].
    pub fn error_code(&self) -> String {
        match self {
            Self::Status { details, .. } if !details.error.is_empty() => details.error.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// The session cookie is missing or expired
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if e.is_builder() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_prefers_server_details() {
        let err = ApiError::Status {
            status: 404,
            details: ErrorDetails {
                error: "not_found".to_string(),
                message: "movie does not exist".to_string(),
            },
        };
        assert_eq!(err.error_code(), "not_found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_error_code_fallback() {
        let err = ApiError::Status {
            status: 500,
            details: ErrorDetails::default(),
        };
        assert_eq!(err.error_code(), GENERIC_ERROR);
        assert_eq!(
            ApiError::Transport("refused".into()).error_code(),
            GENERIC_ERROR
        );
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::Status {
            status: 401,
            details: ErrorDetails::default(),
        };
        assert!(err.is_unauthorized());
    }
}
