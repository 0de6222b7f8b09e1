//! Exchange trace rendering and the tracing-backed sink

mod renderer;
mod sink;

pub use renderer::TraceRenderer;
pub use sink::TracingTraceSink;
