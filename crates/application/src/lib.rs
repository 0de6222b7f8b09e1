//! Apiprobe Application - ports and use cases
//!
//! This crate defines the ports (HTTP client, trace sink) that
//! infrastructure adapters implement, and the use cases that compose
//! one traced HTTP exchange.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError, NoopTraceSink, TraceSink};
pub use use_cases::{decode, execute_traced};
