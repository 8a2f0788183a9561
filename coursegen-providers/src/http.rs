//! HTTP client abstraction and utilities

use crate::constants::DEFAULT_REQUEST_TIMEOUT;
use crate::error;
use coursegen_core::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

/// A raw HTTP response, before any provider-specific interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed `Retry-After` header, when the server sent one in seconds
    pub retry_after: Option<Duration>,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client abstraction
///
/// Only transport failures are errors here; a non-2xx status is a normal
/// [`HttpResponse`] for the provider to interpret.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST request
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<HttpResponse, Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<HttpResponse, Error> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        let status = response.status().as_u16();
        let retry_after = parse_retry_after(response.headers());
        let body = response.text().await.map_err(error::network_error)?;
        trace!(status, bytes = body.len(), "received HTTP response");

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Build the bearer-auth JSON headers, plus any extras
pub fn create_headers(
    api_key: &str,
    additional: Vec<(HeaderName, String)>,
) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {e}")))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in additional {
        let value = HeaderValue::from_str(&value)
            .map_err(|e| Error::Configuration(format!("Invalid value for {name}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_headers() {
        let org = HeaderName::from_static("openai-organization");
        let headers = create_headers("sk-test", vec![(org.clone(), "org-1".to_string())]).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[org], "org-1");
    }

    #[test]
    fn test_create_headers_rejects_control_characters() {
        let result = create_headers("bad\nkey", Vec::new());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("20"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(20)));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_http_response_success_range() {
        let mut response = HttpResponse {
            status: 200,
            retry_after: None,
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 429;
        assert!(!response.is_success());
    }
}
