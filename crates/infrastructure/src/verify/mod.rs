//! Expectation runner

mod runner;

pub use runner::ExpectationRunner;
