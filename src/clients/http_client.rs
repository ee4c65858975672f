//! HTTP client for DNSimple API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a wire request, hands it to the configured
//! [`Transport`], and classifies error statuses.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::config::DnsimpleConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The user agent sent when no prefix is configured.
#[must_use]
pub fn default_user_agent() -> String {
    format!("dnsimple-rust/{SDK_VERSION}")
}

/// HTTP client for making requests to the DNSimple API.
///
/// The client handles:
/// - URL construction from the configured base URL and the `/v2/` prefix
/// - Default headers (User-Agent, Accept, Authorization)
/// - JSON serialization of request bodies
/// - Classification of non-2xx responses into [`ApiError`]
///
/// No retries are performed. Every call results in exactly one exchange.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use dnsimple::clients::{HttpClient, HttpMethod, HttpRequest};
/// use dnsimple::{AccessToken, DnsimpleConfig};
///
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "whoami").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client using the default [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the HTTP backend cannot be initialized.
    pub fn new(config: &DnsimpleConfig) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: &DnsimpleConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent = config.user_agent_prefix().map_or_else(default_user_agent, |prefix| {
            format!("{prefix} | {}", default_user_agent())
        });

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        Self {
            transport,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the wire request for `request` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation.
    pub fn prepare(&self, request: &HttpRequest) -> Result<TransportRequest, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        let body = request.body.as_ref().map(ToString::to_string);
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        Ok(TransportRequest {
            method: request.http_method,
            url: request.url(&self.base_url),
            headers,
            body,
        })
    }

    /// Sends an HTTP request to the DNSimple API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`Transport`)
    /// - A non-2xx response is received (`Api`)
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let wire = self.prepare(request)?;
        let method = wire.method;
        let url = wire.url.clone();

        tracing::debug!(%method, %url, "Sending DNSimple API request");
        let response = self.transport.execute(wire).await?;
        tracing::debug!(%method, %url, status = response.code, "Received DNSimple API response");

        if response.is_ok() {
            return Ok(response);
        }

        let error = ApiError::from_http_response(response.code, &response.status_line(), &response.body);
        tracing::warn!(
            %method,
            %url,
            status = error.status(),
            request_id = response.request_id().unwrap_or_default(),
            "DNSimple API error: {}",
            error.message()
        );
        Err(HttpError::Api(error))
    }
}
