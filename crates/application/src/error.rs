//! Application error types

use thiserror::Error;

use apiprobe_domain::DomainError;

use crate::ports::HttpClientError;

/// Application-level errors.
///
/// Mirrors the failure taxonomy of the suite: transport failures and
/// deserialization failures are distinct from assertion failures,
/// which are data ([`apiprobe_domain::CheckReport`]) rather than
/// errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP call failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The response body did not match the expected shape.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
