//! Response expectations and check results.
//!
//! A [`ResponseExpectation`] is the reusable "response spec" half of
//! an endpoint scenario: the expected status code plus zero or more
//! body-path checks. Applying an expectation to a received response
//! is the infrastructure layer's job; the types here are pure data.

use serde::{Deserialize, Serialize};

/// Expected status code value or range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// Range of status codes (e.g., 200-299).
    Range {
        /// Minimum status code (inclusive).
        min: u16,
        /// Maximum status code (inclusive).
        max: u16,
    },
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::Range { min, max } => status >= *min && status <= *max,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => format!("= {code}"),
            Self::Range { min, max } => format!("in {min}-{max}"),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("in [{}]", codes_str.join(", "))
            }
        }
    }

    /// Create a "success" expectation (200-299).
    #[must_use]
    pub const fn success() -> Self {
        Self::Range { min: 200, max: 299 }
    }

    /// Create an exact status expectation.
    #[must_use]
    pub const fn exact(code: u16) -> Self {
        Self::Exact(code)
    }
}

impl Default for StatusExpectation {
    fn default() -> Self {
        Self::success()
    }
}

impl From<u16> for StatusExpectation {
    fn from(code: u16) -> Self {
        Self::Exact(code)
    }
}

/// Predicate applied to the value at a body path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyPredicate {
    /// The path must resolve to a non-null value.
    Present,
    /// The path must resolve to exactly this JSON value.
    Equals(serde_json::Value),
}

/// A single check against the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCheck {
    /// Path expression into the JSON body (e.g., "$.data.first_name").
    pub path: String,
    /// Predicate applied to the resolved value.
    pub predicate: BodyPredicate,
}

impl BodyCheck {
    /// Get a human-readable description of this check.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.predicate {
            BodyPredicate::Present => format!("body {} present", self.path),
            BodyPredicate::Equals(value) => format!("body {} == {}", self.path, value),
        }
    }
}

/// Reusable bundle of expected-response assertions: the expected
/// status code and the body-path checks.
///
/// Built once through the consuming builder methods and shared
/// read-only across test cases; no method mutates an existing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseExpectation {
    status: StatusExpectation,
    body_checks: Vec<BodyCheck>,
}

impl ResponseExpectation {
    /// Creates an expectation for the given status.
    #[must_use]
    pub fn new(status: impl Into<StatusExpectation>) -> Self {
        Self {
            status: status.into(),
            body_checks: Vec::new(),
        }
    }

    /// Requires the value at `path` to be present and non-null.
    #[must_use]
    pub fn body_present(mut self, path: impl Into<String>) -> Self {
        self.body_checks.push(BodyCheck {
            path: path.into(),
            predicate: BodyPredicate::Present,
        });
        self
    }

    /// Requires the value at `path` to equal the given JSON value.
    #[must_use]
    pub fn body_equals(mut self, path: impl Into<String>, value: serde_json::Value) -> Self {
        self.body_checks.push(BodyCheck {
            path: path.into(),
            predicate: BodyPredicate::Equals(value),
        });
        self
    }

    /// Returns the expected status.
    #[must_use]
    pub const fn status(&self) -> &StatusExpectation {
        &self.status
    }

    /// Returns the body checks.
    #[must_use]
    pub fn body_checks(&self) -> &[BodyCheck] {
        &self.body_checks
    }
}

/// Result of applying a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Human-readable description of the check that ran.
    pub description: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Actual value found (for display).
    pub actual: Option<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl CheckResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            actual: None,
            error: None,
        }
    }

    /// Create a passed result with actual value.
    #[must_use]
    pub fn pass_with_value(description: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(description: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Create a failed result with actual value.
    #[must_use]
    pub fn fail_with_value(
        description: impl Into<String>,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            passed: false,
            actual: Some(actual.into()),
            error: Some(error.into()),
        }
    }
}

/// Results from applying a full expectation to a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Individual check results.
    pub results: Vec<CheckResult>,
    /// Total number of checks.
    pub total: usize,
    /// Number of passed checks.
    pub passed: usize,
    /// Number of failed checks.
    pub failed: usize,
}

impl CheckReport {
    /// Create a new report from individual results.
    #[must_use]
    pub fn new(results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        Self {
            results,
            total,
            passed,
            failed,
        }
    }

    /// Check if every check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}/{} checks passed", self.passed, self.total)?;
        for result in self.results.iter().filter(|r| !r.passed) {
            write!(f, "  FAILED: {}", result.description)?;
            if let Some(actual) = &result.actual {
                write!(f, " (actual: {actual})")?;
            }
            if let Some(error) = &result.error {
                write!(f, " - {error}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
