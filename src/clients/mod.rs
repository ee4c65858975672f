//! HTTP client types for DNSimple API communication.
//!
//! This module provides the layer shared by every endpoint: building the
//! versioned URL and query string, sending the request through a pluggable
//! transport, and classifying error responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The entry point; resource modules hang off it
//! - [`HttpClient`]: Prepares requests and classifies responses
//! - [`HttpRequest`]: A validated request (method, path, body, query)
//! - [`HttpResponse`]: A raw response (status, headers, body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`Transport`]: The swappable executor, with [`ReqwestTransport`] as default
//! - [`HttpError`]: Unified error type, wrapping [`ApiError`], [`TransportError`]
//!   and [`InvalidHttpRequestError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::clients::{HttpMethod, HttpRequest};
//! use dnsimple::{Client, DnsimpleConfig};
//!
//! let client = Client::new(DnsimpleConfig::default())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "tlds/com").build()?;
//! let response = client.http_client().request(&request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call performs exactly one exchange and every non-2xx status
//! surfaces as one [`ApiError`].

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use client::{json_body, Client};
pub use errors::{ApiError, HttpError, InvalidHttpRequestError, TransportError};
pub use http_client::{default_user_agent, HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, API_VERSION_PATH};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, Transport, TransportRequest};
