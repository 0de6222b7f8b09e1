//! Tracing-backed trace sink.

use apiprobe_application::ports::TraceSink;
use apiprobe_domain::{LogDetail, RequestRecord, ResponseSpec};

use super::TraceRenderer;

/// Trace sink that emits rendered exchanges through `tracing`.
///
/// The template and detail level come from the request record, so a
/// spec's `log`/`trace_style` configuration travels with every call
/// issued under it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTraceSink;

impl TracingTraceSink {
    /// Creates a new sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingTraceSink {
    fn record(&self, request: &RequestRecord, response: &ResponseSpec) {
        let detail = request.log_detail();
        if detail == LogDetail::None {
            return;
        }
        let trace = TraceRenderer::new(request.style()).render(request, response, detail);
        tracing::info!(target: "apiprobe::trace", "{} {}\n{trace}", request.method(), request.url());
    }
}
