//! Request specification type

use serde::{Deserialize, Serialize};

use super::{Header, Headers};
use crate::trace::{LogDetail, TraceStyle};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Reusable bundle of request-shaping defaults for one logical
/// endpoint: base URI, base path, default headers, and trace
/// configuration.
///
/// A specification is assembled once through the consuming builder
/// methods and then shared read-only across any number of checks;
/// no method mutates an existing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Human-readable name of the endpoint scenario
    name: String,
    /// Scheme and authority, e.g. "https://reqres.in"
    base_uri: String,
    /// Path under the base URI, e.g. "/api/users/2"
    base_path: String,
    /// Headers sent with every request issued under this spec
    #[serde(default)]
    headers: Headers,
    /// How much of the exchange is logged
    #[serde(default)]
    log_detail: LogDetail,
    /// Which trace template renders the exchange
    #[serde(default)]
    trace_style: TraceStyle,
    /// Per-call timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl RequestSpec {
    /// Creates a new request specification with empty defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_uri: String::new(),
            base_path: String::new(),
            headers: Headers::new(),
            log_detail: LogDetail::default(),
            trace_style: TraceStyle::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the base URI (scheme and authority).
    #[must_use]
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = uri.into();
        self
    }

    /// Sets the base path under the base URI.
    #[must_use]
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Sets the log detail for exchanges issued under this spec.
    #[must_use]
    pub const fn log(mut self, detail: LogDetail) -> Self {
        self.log_detail = detail;
        self
    }

    /// Selects the trace template.
    #[must_use]
    pub const fn trace_style(mut self, style: TraceStyle) -> Self {
        self.trace_style = style;
        self
    }

    /// Sets the per-call timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the configured log detail.
    #[must_use]
    pub const fn log_detail(&self) -> LogDetail {
        self.log_detail
    }

    /// Returns the configured trace template.
    #[must_use]
    pub const fn style(&self) -> TraceStyle {
        self.trace_style
    }

    /// Returns the per-call timeout in milliseconds.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout_ms
    }

    /// Joins base URI and base path into the full request URL.
    #[must_use]
    pub fn full_url(&self) -> String {
        let base = self.base_uri.trim_end_matches('/');
        if self.base_path.is_empty() {
            return base.to_string();
        }
        let path = if self.base_path.starts_with('/') {
            self.base_path.clone()
        } else {
            format!("/{}", self.base_path)
        };
        format!("{base}{path}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let spec = RequestSpec::new("get single user")
            .base_uri("https://reqres.in")
            .base_path("/api/users/2")
            .log(LogDetail::All);

        assert_eq!(spec.name(), "get single user");
        assert_eq!(spec.full_url(), "https://reqres.in/api/users/2");
        assert_eq!(spec.log_detail(), LogDetail::All);
        assert_eq!(spec.style(), TraceStyle::Plain);
    }

    #[test]
    fn test_full_url_slash_handling() {
        let spec = RequestSpec::new("t")
            .base_uri("https://reqres.in/")
            .base_path("api/users");
        assert_eq!(spec.full_url(), "https://reqres.in/api/users");

        let spec = RequestSpec::new("t").base_uri("https://reqres.in");
        assert_eq!(spec.full_url(), "https://reqres.in");
    }

    #[test]
    fn test_default_headers() {
        let spec = RequestSpec::new("create user").header("Content-Type", "application/json");
        assert_eq!(spec.headers().get("content-type"), Some("application/json"));
    }

    #[test]
    fn test_shared_reuse_is_read_only() {
        // Applying a spec twice must observe identical values.
        let spec = RequestSpec::new("get single user")
            .base_uri("https://reqres.in")
            .base_path("/api/users/2");

        let first = spec.full_url();
        let second = spec.full_url();
        assert_eq!(first, second);
        assert_eq!(spec, spec.clone());
    }
}
