//! Application use cases

mod execute_check;

pub use execute_check::{decode, execute_traced};
