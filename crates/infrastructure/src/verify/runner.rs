//! Expectation runner implementation.
//!
//! Applies a response expectation to a received response and
//! produces a check report.

use apiprobe_domain::expectation::{
    BodyCheck, BodyPredicate, CheckReport, CheckResult, ResponseExpectation, StatusExpectation,
};
use apiprobe_domain::response::ResponseSpec;

/// Applies expectations to responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpectationRunner;

impl ExpectationRunner {
    /// Creates a new runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies the full expectation to a response.
    #[must_use]
    pub fn run(&self, expectation: &ResponseExpectation, response: &ResponseSpec) -> CheckReport {
        let mut results = Vec::with_capacity(1 + expectation.body_checks().len());

        results.push(Self::check_status(expectation.status(), response));
        for check in expectation.body_checks() {
            results.push(Self::check_body(check, response));
        }

        CheckReport::new(results)
    }

    fn check_status(expected: &StatusExpectation, response: &ResponseSpec) -> CheckResult {
        let description = format!("status {}", expected.description());
        let actual = response.status;
        if expected.matches(actual) {
            CheckResult::pass_with_value(description, actual.to_string())
        } else {
            CheckResult::fail_with_value(
                description,
                actual.to_string(),
                format!(
                    "expected status {}, got {}",
                    expected.description(),
                    response.status_code()
                ),
            )
        }
    }

    fn check_body(check: &BodyCheck, response: &ResponseSpec) -> CheckResult {
        let description = check.description();

        let json = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(json) => json,
            Err(e) => {
                return CheckResult::fail(
                    description,
                    format!("failed to parse body as JSON: {e}"),
                );
            }
        };

        let found = match query_body_path(&json, &check.path) {
            Ok(found) => found,
            Err(e) => {
                return CheckResult::fail(
                    description,
                    format!("invalid body path '{}': {e}", check.path),
                );
            }
        };

        match (&check.predicate, found) {
            (BodyPredicate::Present, Some(value)) if !value.is_null() => {
                CheckResult::pass_with_value(description, value.to_string())
            }
            (BodyPredicate::Present, Some(value)) => CheckResult::fail_with_value(
                description,
                value.to_string(),
                format!("body path '{}' is null", check.path),
            ),
            (BodyPredicate::Equals(expected), Some(value)) => {
                if &value == expected {
                    CheckResult::pass_with_value(description, value.to_string())
                } else {
                    CheckResult::fail_with_value(
                        description,
                        value.to_string(),
                        format!(
                            "body path '{}' mismatch: expected {expected}, got {value}",
                            check.path
                        ),
                    )
                }
            }
            (_, None) => CheckResult::fail(
                description,
                format!("body path '{}' not found", check.path),
            ),
        }
    }
}

/// Query a JSON value using a simple path syntax.
/// Supports: `$.field`, `$.field.nested`, `$.array[0]`.
fn query_body_path(
    json: &serde_json::Value,
    path: &str,
) -> Result<Option<serde_json::Value>, String> {
    let path = path.trim();
    let Some(path) = path.strip_prefix('$') else {
        return Err("body path must start with '$'".to_string());
    };
    if path.is_empty() {
        return Ok(Some(json.clone()));
    }

    let path = path.strip_prefix('.').unwrap_or(path);
    let mut current = json.clone();

    for segment in split_path_segments(path) {
        if let Some((name, index)) = parse_array_access(&segment) {
            if !name.is_empty() {
                current = match current.get(&name) {
                    Some(v) => v.clone(),
                    None => return Ok(None),
                };
            }
            let idx: usize = index
                .parse()
                .map_err(|_| format!("invalid array index: {index}"))?;
            current = match current.get(idx) {
                Some(v) => v.clone(),
                None => return Ok(None),
            };
        } else {
            current = match current.get(&segment) {
                Some(v) => v.clone(),
                None => return Ok(None),
            };
        }
    }

    Ok(Some(current))
}

/// Split a path into segments, respecting array brackets.
fn split_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for ch in path.chars() {
        match ch {
            '.' if !in_bracket => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                in_bracket = true;
                current.push(ch);
            }
            ']' => {
                in_bracket = false;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Parse array access like "field[0]" into ("field", "0").
fn parse_array_access(segment: &str) -> Option<(String, String)> {
    let bracket_start = segment.find('[')?;
    if !segment.ends_with(']') {
        return None;
    }
    let name = segment[..bracket_start].to_string();
    let index = segment[bracket_start + 1..segment.len() - 1].to_string();
    Some((name, index))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn json_response(status: u16, body: &str) -> ResponseSpec {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        ResponseSpec::new(
            status,
            headers,
            body.as_bytes().to_vec(),
            Duration::from_millis(50),
        )
    }

    #[test]
    fn test_status_exact_pass_and_fail() {
        let runner = ExpectationRunner::new();
        let response = json_response(200, "{}");

        let report = runner.run(&ResponseExpectation::new(200), &response);
        assert!(report.all_passed());

        let report = runner.run(&ResponseExpectation::new(201), &response);
        assert!(!report.all_passed());
        assert_eq!(report.failed, 1);
        assert_eq!(report.results[0].actual.as_deref(), Some("200"));
    }

    #[test]
    fn test_status_one_of() {
        let runner = ExpectationRunner::new();
        let response = json_response(204, "");

        let expectation =
            ResponseExpectation::new(StatusExpectation::OneOf(vec![200, 202, 204]));
        let report = runner.run(&expectation, &response);
        assert!(report.all_passed());
    }

    #[test]
    fn test_body_present() {
        let runner = ExpectationRunner::new();
        let response = json_response(
            200,
            r#"{"data": {"first_name": "Janet", "last_name": "Weaver"}}"#,
        );

        let expectation = ResponseExpectation::new(200).body_present("$.data.first_name");
        let report = runner.run(&expectation, &response);
        assert!(report.all_passed(), "{report}");

        let expectation = ResponseExpectation::new(200).body_present("$.data.missing");
        let report = runner.run(&expectation, &response);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_body_present_rejects_null() {
        let runner = ExpectationRunner::new();
        let response = json_response(200, r#"{"data": {"first_name": null}}"#);

        let expectation = ResponseExpectation::new(200).body_present("$.data.first_name");
        let report = runner.run(&expectation, &response);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_body_equals() {
        let runner = ExpectationRunner::new();
        let response = json_response(200, r#"{"data": {"first_name": "Janet"}}"#);

        let expectation = ResponseExpectation::new(200)
            .body_equals("$.data.first_name", serde_json::json!("Janet"));
        let report = runner.run(&expectation, &response);
        assert!(report.all_passed(), "{report}");

        let expectation = ResponseExpectation::new(200)
            .body_equals("$.data.first_name", serde_json::json!("Emma"));
        let report = runner.run(&expectation, &response);
        assert!(!report.all_passed());
        assert_eq!(report.results[1].actual.as_deref(), Some("\"Janet\""));
    }

    #[test]
    fn test_body_check_on_non_json_body() {
        let runner = ExpectationRunner::new();
        let response = json_response(200, "not json at all");

        let expectation = ResponseExpectation::new(200).body_present("$.data");
        let report = runner.run(&expectation, &response);
        // Status passes, body check fails, the runner never panics.
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_invalid_path_is_a_failed_check() {
        let runner = ExpectationRunner::new();
        let response = json_response(200, "{}");

        let expectation = ResponseExpectation::new(200).body_present("data.first_name");
        let report = runner.run(&expectation, &response);
        assert!(!report.all_passed());
        assert!(
            report.results[1]
                .error
                .as_deref()
                .unwrap()
                .contains("must start with '$'")
        );
    }

    #[test]
    fn test_query_body_path_array_access() {
        let json = serde_json::json!({"items": [{"id": 1}, {"id": 2}]});
        let value = query_body_path(&json, "$.items[1].id").unwrap().unwrap();
        assert_eq!(value, serde_json::json!(2));

        assert_eq!(query_body_path(&json, "$.items[5]").unwrap(), None);
        assert!(query_body_path(&json, "$.items[x]").is_err());
    }

    #[test]
    fn test_query_body_path_root() {
        let json = serde_json::json!({"a": 1});
        assert_eq!(query_body_path(&json, "$").unwrap(), Some(json.clone()));
    }
}
