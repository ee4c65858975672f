//! Pluggable transport for executing HTTP exchanges.
//!
//! [`HttpClient`](crate::clients::HttpClient) hands every prepared request
//! to a [`Transport`]. The default is [`ReqwestTransport`]; tests substitute
//! an in-memory implementation that records requests and replays canned
//! responses.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use dnsimple::clients::{HttpResponse, Transport, TransportError, TransportRequest};
//! use std::collections::HashMap;
//!
//! struct NoContent;
//!
//! #[async_trait]
//! impl Transport for NoContent {
//!     async fn execute(&self, _req: TransportRequest) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::new(204, HashMap::new(), ""))
//!     }
//! }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// A fully prepared request, ready to go over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including the query string.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// JSON-serialized body. `None` means no body is sent at all.
    pub body: Option<String>,
}

/// Executes one HTTP exchange per call.
///
/// Implementations must be safe to share between tasks; the client adds no
/// locking of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no HTTP response was obtained.
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}

/// The default [`Transport`], backed by `reqwest` with rustls.
///
/// No retries are performed and the library's default timeouts apply.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, e.g. one with a proxy or custom timeouts.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn map_error(error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                detail: error.to_string(),
            }
        } else {
            TransportError::Network(error)
        }
    }

    fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(name.as_str().to_lowercase()).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Patch => self.client.patch(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await.map_err(Self::map_error)?;
        let code = res.status().as_u16();
        let headers = Self::collect_headers(res.headers());
        let body = res.text().await.map_err(Self::map_error)?;

        Ok(HttpResponse::new(code, headers, body))
    }
}
