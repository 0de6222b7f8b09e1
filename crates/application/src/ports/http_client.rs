//! HTTP client port

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use apiprobe_domain::{RequestRecord, ResponseSpec};

/// Transport-level failures of a single HTTP call.
///
/// Every variant is terminal for the test case it occurs in; nothing
/// is retried or recovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The call did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// The host that failed to resolve.
        host: String,
        /// The underlying resolver message.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// The host that refused.
        host: String,
        /// The port that refused.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body is invalid.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The redirect limit was exceeded.
    #[error("stopped after {max} redirects")]
    TooManyRedirects {
        /// The redirect limit.
        max: usize,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP
/// libraries.
pub trait HttpClient: Send + Sync {
    /// Executes the given wire-level request and returns the
    /// received response.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpClientError`] if the call fails before a
    /// response is received (timeout, DNS, connection failure).
    /// Non-2xx responses are not errors; judging the status code is
    /// the expectation runner's job.
    fn execute(
        &self,
        request: &RequestRecord,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}
