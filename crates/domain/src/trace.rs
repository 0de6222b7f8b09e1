//! Trace rendering configuration values.
//!
//! These are plain configuration values carried by a request
//! specification; rendering itself happens in the infrastructure
//! layer.

use serde::{Deserialize, Serialize};

/// How much of an exchange is written to the log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogDetail {
    /// Nothing is logged.
    #[default]
    None,
    /// Only the request line and response status line.
    Status,
    /// Only the request and response bodies.
    Body,
    /// Request line, headers, bodies, and status.
    All,
}

impl LogDetail {
    /// Returns true if status lines should be logged.
    #[must_use]
    pub const fn logs_status(self) -> bool {
        matches!(self, Self::Status | Self::All)
    }

    /// Returns true if bodies should be logged.
    #[must_use]
    pub const fn logs_body(self) -> bool {
        matches!(self, Self::Body | Self::All)
    }

    /// Returns true if headers should be logged.
    #[must_use]
    pub const fn logs_headers(self) -> bool {
        matches!(self, Self::All)
    }
}

/// The visual template used when rendering an exchange trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStyle {
    /// Prefix-per-line rendering (`>` request, `<` response).
    #[default]
    Plain,
    /// Box-drawn rendering with section banners.
    Boxed,
}
