//! Wire-level request record

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Header, Headers, HttpMethod, RequestBody, RequestSpec};
use crate::error::{DomainError, DomainResult};
use crate::trace::{LogDetail, TraceStyle};

/// What is actually put on the wire for one call: the method, the
/// resolved URL, the effective headers, and the body.
///
/// A record is assembled from a [`RequestSpec`] plus the call-time
/// method and body. The same record is handed to the HTTP client and
/// to the trace sink, so the rendered trace always matches the sent
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    method: HttpMethod,
    url: String,
    headers: Headers,
    body: RequestBody,
    log_detail: LogDetail,
    trace_style: TraceStyle,
    timeout_ms: u64,
}

impl RequestRecord {
    /// Assembles the wire-level record for one call.
    ///
    /// The spec's default headers are taken as-is; a `Content-Type`
    /// header is added only when the body carries a content type and
    /// the spec did not already set one. A body without a content
    /// type contributes no header at all.
    #[must_use]
    pub fn new(spec: &RequestSpec, method: HttpMethod, body: RequestBody) -> Self {
        let mut headers: Headers = spec.headers().iter().cloned().collect();
        if let Some(content_type) = body.content_type()
            && !headers.contains("content-type")
        {
            headers.add(Header::new("Content-Type", content_type));
        }

        Self {
            method,
            url: spec.full_url(),
            headers,
            body,
            log_detail: spec.log_detail(),
            trace_style: spec.style(),
            timeout_ms: spec.timeout(),
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the resolved URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validates the resolved URL and returns the parsed version.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is malformed.
    pub fn parse_url(&self) -> DomainResult<Url> {
        Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))
    }

    /// Returns the effective headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the request body.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Returns the log detail inherited from the spec.
    #[must_use]
    pub const fn log_detail(&self) -> LogDetail {
        self.log_detail
    }

    /// Returns the trace template inherited from the spec.
    #[must_use]
    pub const fn style(&self) -> TraceStyle {
        self.trace_style
    }

    /// Returns the per-call timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}
