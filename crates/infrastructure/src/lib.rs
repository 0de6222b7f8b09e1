//! Apiprobe Infrastructure - adapters
//!
//! Implements the application ports with concrete technology:
//! reqwest for HTTP, tracing for the log sink, and the expectation
//! runner that judges received responses.

pub mod adapters;
pub mod trace;
pub mod verify;

pub use adapters::ReqwestHttpClient;
pub use trace::{TraceRenderer, TracingTraceSink};
pub use verify::ExpectationRunner;
