//! Apiprobe Domain - Core check-suite types
//!
//! This crate defines the domain model for the apiprobe API checks.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod expectation;
pub mod request;
pub mod response;
pub mod trace;

pub use error::{DomainError, DomainResult};
pub use expectation::{
    BodyCheck, BodyPredicate, CheckReport, CheckResult, ResponseExpectation, StatusExpectation,
};
pub use request::{Header, Headers, HttpMethod, RequestBody, RequestRecord, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use trace::{LogDetail, TraceStyle};
