//! Execute one traced HTTP exchange.
//!
//! This is the single use case of the suite: assemble the wire-level
//! record from a request spec, execute it through the HTTP client
//! port, and hand the completed exchange to the trace sink. Judging
//! the response is left to the expectation runner.

use serde::de::DeserializeOwned;

use apiprobe_domain::{HttpMethod, RequestBody, RequestRecord, RequestSpec, ResponseSpec};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{HttpClient, TraceSink};

/// Executes one call under the given request spec and records the
/// exchange on the trace sink.
///
/// The optional DTO body is passed pre-serialized as a
/// [`RequestBody`]; use [`RequestBody::none`] for body-less calls.
///
/// # Errors
///
/// Returns [`ApplicationError::Transport`] if the call fails before
/// a response is received. Responses with unexpected status codes
/// are not errors here.
pub async fn execute_traced<H, T>(
    http: &H,
    sink: &T,
    spec: &RequestSpec,
    method: HttpMethod,
    body: RequestBody,
) -> ApplicationResult<ResponseSpec>
where
    H: HttpClient + ?Sized,
    T: TraceSink + ?Sized,
{
    let record = RequestRecord::new(spec, method, body);
    let response = http.execute(&record).await?;
    sink.record(&record, &response);
    Ok(response)
}

/// Decodes a response body into a typed value.
///
/// # Errors
///
/// Returns [`ApplicationError::Deserialization`] if the body does
/// not match the expected shape.
pub fn decode<T: DeserializeOwned>(response: &ResponseSpec) -> ApplicationResult<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        ApplicationError::Deserialization(format!("failed to decode response body: {e}"))
    })
}
