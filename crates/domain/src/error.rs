//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be produced or is invalid.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A body-path expression is malformed.
    #[error("invalid body path: {0}")]
    InvalidBodyPath(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
