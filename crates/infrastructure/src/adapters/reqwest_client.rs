//! HTTP client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest
//! library. It handles all HTTP communication for the suite.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};

use apiprobe_application::ports::{HttpClient, HttpClientError};
use apiprobe_domain::{
    request::{HttpMethod, RequestBody, RequestBodyKind, RequestRecord},
    response::ResponseSpec,
};

const REDIRECT_LIMIT: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from
/// the application layer. The wrapped client pools connections
/// internally; nothing else is shared between calls.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "apiprobe/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("apiprobe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(REDIRECT_LIMIT))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client wrapping a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the request body, if any.
    ///
    /// JSON bodies are validated before sending so that a malformed
    /// payload fails locally instead of producing a confusing remote
    /// rejection. A body of kind `None` attaches nothing; in
    /// particular no `Content-Type` header is synthesized for it.
    fn attach_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        match &body.kind {
            RequestBodyKind::None => Ok(builder),
            RequestBodyKind::Raw { content_type } => {
                if content_type.contains("application/json") && !body.content.is_empty() {
                    let _: serde_json::Value = serde_json::from_str(&body.content)
                        .map_err(|e| HttpClientError::InvalidBody(format!("invalid JSON: {e}")))?;
                }
                Ok(builder.body(body.content.clone()))
            }
        }
    }

    /// Maps reqwest errors to port `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return HttpClientError::Dns { host, message };
            }
            if message.to_lowercase().contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error.url().and_then(Url::port_or_known_default).unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: REDIRECT_LIMIT,
            };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestRecord,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        // Clone what we need to move into the async block
        let method = request.method();
        let headers: Vec<_> = request.headers().iter().cloned().collect();
        let body = request.body().clone();
        let timeout_ms = request.timeout_ms();
        let parsed_url = request
            .parse_url()
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()));

        Box::pin(async move {
            let parsed_url = parsed_url?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(Duration::from_millis(timeout_ms));

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            builder = Self::attach_body(builder, &body)?;

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let duration = start.elapsed();
            let status = response.status().as_u16();

            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            Ok(ResponseSpec::new(
                status,
                response_headers,
                body_bytes,
                duration,
            ))
        })
    }
}
