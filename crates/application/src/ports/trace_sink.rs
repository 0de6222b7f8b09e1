//! Trace sink port

use apiprobe_domain::{RequestRecord, ResponseSpec};

/// Port for recording one completed request/response exchange.
///
/// A sink observes the exchange after the fact; it must not alter
/// request or response content, and recording must never fail the
/// call it observes.
pub trait TraceSink: Send + Sync {
    /// Records one completed exchange.
    fn record(&self, request: &RequestRecord, response: &ResponseSpec);
}

/// A sink that discards every exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn record(&self, _request: &RequestRecord, _response: &ResponseSpec) {}
}
