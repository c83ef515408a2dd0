//! Shared error type across apimetrics crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A metric could not be built or registered.
    Registration,
    /// Invalid input / malformed config.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Registration => "REGISTRATION",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ApiMetricsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ApiMetricsError {
    /// Duplicate or malformed metric. Always fatal at startup.
    #[error("metric registration failed: {0}")]
    Registration(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiMetricsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiMetricsError::Registration(_) => ErrorCode::Registration,
            ApiMetricsError::BadRequest(_) => ErrorCode::BadRequest,
            ApiMetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
