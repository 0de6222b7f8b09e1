//! Suite configuration.

use crate::specs::REQRES_BASE_URI;

/// Environment variable that overrides the target base URI.
pub const ENV_BASE_URI: &str = "APIPROBE_BASE_URI";

/// Runtime configuration for a suite run.
///
/// The only knob is the base URI of the service under test; it
/// defaults to the public reqres instance and can be redirected to a
/// local deployment through [`ENV_BASE_URI`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    base_uri: String,
}

impl SuiteConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_uri = lookup(ENV_BASE_URI)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| REQRES_BASE_URI.to_string());
        Self { base_uri }
    }

    /// Returns the base URI of the service under test.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_uri: REQRES_BASE_URI.to_string(),
        }
    }
}
