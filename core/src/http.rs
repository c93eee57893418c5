//! HTTP transport types and the JSON fetch helper.
//!
//! # Design
//! Requests and responses are plain data. `get_json` builds an `HttpRequest`,
//! hands it to a `Transport`, and interprets the `HttpResponse`; it never
//! touches a socket itself. Production code plugs in `UreqTransport`, tests
//! plug in an in-memory transport that records every URL it was asked for.
//!
//! No retry, timeout, or backoff: one request, one answer. Errors propagate
//! to the caller unchanged.

use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an `HttpRequest` and returns whatever the server said.
///
/// Implementations must return non-2xx statuses as `Ok(HttpResponse)`;
/// `Err` is reserved for failures that produced no response at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// GET `url` and decode the body as JSON.
pub fn get_json<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<Value, ApiError> {
    debug!(url, "GET");
    let response = transport.execute(HttpRequest::get(url))?;
    check_status(&response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Canned {
        status: u16,
        body: &'static str,
    }

    impl Transport for Canned {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.to_string(),
            })
        }
    }

    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport(format!("connection refused: {}", request.url)))
        }
    }

    #[test]
    fn get_builds_json_request() {
        let req = HttpRequest::get("http://example.com");
        assert_eq!(req.url, "http://example.com");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn get_json_decodes_payload() {
        let cases = [
            ("http://example.com", r#"{"payload": true}"#, json!({"payload": true})),
            ("http://holberton.io", r#"{"payload": false}"#, json!({"payload": false})),
        ];
        for (url, body, expected) in cases {
            let transport = Canned { status: 200, body };
            assert_eq!(get_json(&transport, url).unwrap(), expected, "{url}");
        }
    }

    #[test]
    fn get_json_not_found() {
        let transport = Canned { status: 404, body: r#"{"message":"Not Found"}"# };
        let err = get_json(&transport, "http://example.com").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn get_json_unexpected_status() {
        let transport = Canned { status: 500, body: "internal error" };
        let err = get_json(&transport, "http://example.com").unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn get_json_bad_body() {
        let transport = Canned { status: 200, body: "not json" };
        let err = get_json(&transport, "http://example.com").unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn get_json_propagates_transport_failure() {
        let err = get_json(&Unreachable, "http://127.0.0.1:1").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
