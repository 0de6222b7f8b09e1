//! Integration tests for the reqwest adapter.
//!
//! These use wiremock servers to exercise the adapter without
//! touching any real network, including the content-type contract
//! for body-less requests and the transport error mapping.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use apiprobe_application::ports::{HttpClient, HttpClientError};
use apiprobe_domain::{HttpMethod, RequestBody, RequestRecord, RequestSpec};
use apiprobe_infrastructure::ReqwestHttpClient;

fn record(base_uri: &str, base_path: &str, method: HttpMethod, body: RequestBody) -> RequestRecord {
    let spec = RequestSpec::new("adapter test")
        .base_uri(base_uri)
        .base_path(base_path);
    RequestRecord::new(&spec, method, body)
}

fn content_type_of(request: &wiremock::Request) -> Option<String> {
    request.headers.iter().find_map(|(name, values)| {
        name.as_str()
            .eq_ignore_ascii_case("content-type")
            .then(|| values.last().as_str().to_string())
    })
}

#[tokio::test]
async fn get_returns_response_spec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": {"first_name": "Janet"}})),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new().unwrap();
    let response = client
        .execute(&record(
            &server.uri(),
            "/api/users/2",
            HttpMethod::Get,
            RequestBody::none(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_json());
    let json = response.body_as_json().unwrap();
    assert_eq!(json["data"]["first_name"], "Janet");
}

#[tokio::test]
async fn json_body_sends_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(|request: &wiremock::Request| {
            match content_type_of(request).as_deref() {
                Some("application/json") => ResponseTemplate::new(201),
                _ => ResponseTemplate::new(400),
            }
        })
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new().unwrap();
    let response = client
        .execute(&record(
            &server.uri(),
            "/api/users",
            HttpMethod::Post,
            RequestBody::json(r#"{"name":"morpheus","job":"leader"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn empty_body_sends_no_content_type() {
    // Pins the negative-create contract: a body-less POST must not
    // carry any content-type header.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(|request: &wiremock::Request| {
            if content_type_of(request).is_none() {
                ResponseTemplate::new(415)
            } else {
                ResponseTemplate::new(400)
            }
        })
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new().unwrap();
    let response = client
        .execute(&record(
            &server.uri(),
            "/api/users",
            HttpMethod::Post,
            RequestBody::none(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 415);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new().unwrap();
    let response = client
        .execute(&record(
            &server.uri(),
            "/api/users/2",
            HttpMethod::Delete,
            RequestBody::none(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let spec = RequestSpec::new("slow")
        .base_uri(server.uri())
        .base_path("/slow")
        .timeout_ms(200);
    let record = RequestRecord::new(&spec, HttpMethod::Get, RequestBody::none());

    let client = ReqwestHttpClient::new().unwrap();
    let error = client.execute(&record).await.unwrap_err();

    assert_eq!(error, HttpClientError::Timeout { timeout_ms: 200 });
}

#[tokio::test]
async fn unreachable_host_maps_to_connection_error() {
    // Bind a port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = ReqwestHttpClient::new().unwrap();
    let error = client
        .execute(&record(
            &format!("http://127.0.0.1:{port}"),
            "/api/users",
            HttpMethod::Get,
            RequestBody::none(),
        ))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_)
    ));
}

#[tokio::test]
async fn invalid_url_is_rejected_before_sending() {
    let client = ReqwestHttpClient::new().unwrap();
    let error = client
        .execute(&record("not a url", "/x", HttpMethod::Get, RequestBody::none()))
        .await
        .unwrap_err();

    assert!(matches!(error, HttpClientError::InvalidUrl(_)));
}
