//! Ports implemented by infrastructure adapters

mod http_client;
mod trace_sink;

pub use http_client::{HttpClient, HttpClientError};
pub use trace_sink::{NoopTraceSink, TraceSink};
