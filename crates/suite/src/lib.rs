//! End-to-end check suite for the reqres user-management API.
//!
//! This crate holds what is specific to the target service: the
//! request/expectation pairs for each endpoint scenario, the DTOs
//! the service speaks, and the suite configuration. The scenarios
//! themselves live under `tests/`.

pub mod config;
pub mod models;
pub mod specs;

pub use config::SuiteConfig;
pub use models::{CreateUserRequest, CreateUserResponse};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the tracing subscriber for suite runs.
///
/// Honors `RUST_LOG`, defaulting to `info` so request traces emitted
/// under the `apiprobe::trace` target are visible. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
