//! The DNSimple API client.
//!
//! This module provides [`Client`], the entry point for every endpoint.
//! Each API area is reached through an accessor that borrows the client,
//! e.g. `client.zones()` or `client.registrar()`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::transport::Transport;
use crate::config::DnsimpleConfig;
use crate::rest::{ListOptions, RequestInfo, Response};

/// Client for the DNSimple API v2.
///
/// Holds the configuration and the HTTP layer. Resource modules borrow it,
/// so a single `Client` can serve any number of concurrent calls.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use dnsimple::{AccessToken, Client, DnsimpleConfig, ListOptions};
///
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("my-token")?)
///     .build();
/// let client = Client::new(config)?;
///
/// let whoami = client.identity().whoami().await?;
/// let zones = client.zones().list_zones("1010", Some(&ListOptions::new().page(1))).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http_client: HttpClient,
    config: DnsimpleConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client backed by the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the HTTP backend cannot be initialized.
    pub fn new(config: DnsimpleConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: DnsimpleConfig, transport: Arc<dyn Transport>) -> Self {
        let http_client = HttpClient::with_transport(&config, transport);
        Self {
            http_client,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DnsimpleConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request, appending list options to the query string.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<T>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .list_options(options)
            .build()?;
        self.execute(&request).await
    }

    /// Sends a POST request. `None` sends no body at all.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response<T>, HttpError> {
        self.send(HttpMethod::Post, path, body).await
    }

    /// Sends a PUT request. `None` sends no body at all.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response<T>, HttpError> {
        self.send(HttpMethod::Put, path, body).await
    }

    /// Sends a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Response<T>, HttpError> {
        self.send(HttpMethod::Patch, path, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>, HttpError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response<T>, HttpError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.execute(&builder.build()?).await
    }

    /// Sends a prepared request and decodes the enveloped body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<Response<T>, HttpError> {
        let http_response = self.http_client.request(request).await?;
        Response::from_http_response(self.request_info(request), http_response)
    }

    /// Sends a prepared request and decodes the body as the payload itself.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn execute_unwrapped<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<Response<T>, HttpError> {
        let http_response = self.http_client.request(request).await?;
        Response::from_unwrapped_http_response(self.request_info(request), http_response)
    }

    fn request_info(&self, request: &HttpRequest) -> RequestInfo {
        RequestInfo {
            method: request.http_method,
            url: request.url(self.http_client.base_url()),
            body: request.body.as_ref().map(ToString::to_string),
        }
    }
}

/// Serializes caller-supplied attributes into a JSON request body.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidBody`] if serialization fails.
pub fn json_body<B: Serialize + ?Sized>(attributes: &B) -> Result<serde_json::Value, HttpError> {
    serde_json::to_value(attributes).map_err(|e| {
        HttpError::InvalidRequest(InvalidHttpRequestError::InvalidBody {
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Attributes {
        name: &'static str,
    }

    #[test]
    fn test_json_body_serializes_structs() {
        let body = json_body(&Attributes { name: "example.com" }).unwrap();
        assert_eq!(body, serde_json::json!({"name": "example.com"}));
    }

    #[test]
    fn test_json_body_rejects_non_string_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "value");

        let result = json_body(&map);
        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::InvalidBody { .. }
            ))
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
