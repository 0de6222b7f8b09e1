//! Reusable request/expectation pairs for the user-management API.
//!
//! Each factory returns the request spec and the response expectation
//! for one endpoint scenario. Construction never fails; anything
//! wrong with a spec only surfaces when a call is executed under it.

use apiprobe_domain::{LogDetail, RequestSpec, ResponseExpectation, StatusExpectation, TraceStyle};

/// Base URI of the public reqres instance.
pub const REQRES_BASE_URI: &str = "https://reqres.in";

/// Fetching an existing user by id.
///
/// Expects 200 with a populated `data.first_name`; renders the full
/// exchange with the boxed trace template.
#[must_use]
pub fn get_user(base_uri: &str) -> (RequestSpec, ResponseExpectation) {
    let spec = RequestSpec::new("get single user")
        .base_uri(base_uri)
        .base_path("/api/users/2")
        .log(LogDetail::All)
        .trace_style(TraceStyle::Boxed);
    let expectation = ResponseExpectation::new(200).body_present("$.data.first_name");
    (spec, expectation)
}

/// Fetching a user id that does not exist. Expects 404.
#[must_use]
pub fn missing_user(base_uri: &str) -> (RequestSpec, ResponseExpectation) {
    let spec = RequestSpec::new("get missing user")
        .base_uri(base_uri)
        .base_path("/api/users/278127")
        .log(LogDetail::Status);
    let expectation = ResponseExpectation::new(404);
    (spec, expectation)
}

/// Creating a user from a JSON payload. Expects 201; field-level
/// verification happens on the decoded response type.
#[must_use]
pub fn create_user(base_uri: &str) -> (RequestSpec, ResponseExpectation) {
    let spec = RequestSpec::new("create user")
        .base_uri(base_uri)
        .base_path("/api/users")
        .log(LogDetail::All);
    let expectation = ResponseExpectation::new(201);
    (spec, expectation)
}

/// Creating a user with no payload and no content type. Expects the
/// service to reject the call with 415.
#[must_use]
pub fn create_user_negative(base_uri: &str) -> (RequestSpec, ResponseExpectation) {
    let spec = RequestSpec::new("create user without payload")
        .base_uri(base_uri)
        .base_path("/api/users")
        .log(LogDetail::Status);
    let expectation = ResponseExpectation::new(415);
    (spec, expectation)
}

/// Deleting a user by id. Expects exactly 204 and checks no body.
#[must_use]
pub fn delete_user(base_uri: &str) -> (RequestSpec, ResponseExpectation) {
    let spec = RequestSpec::new("delete user")
        .base_uri(base_uri)
        .base_path("/api/users/2")
        .log(LogDetail::Status);
    let expectation = ResponseExpectation::new(StatusExpectation::exact(204));
    (spec, expectation)
}
