//! # DNSimple API Rust client
//!
//! An async client for the DNSimple REST API v2, covering accounts,
//! domains, zones and records, contacts, the registrar, templates,
//! services, TLDs, webhooks and the OAuth authorization code flow.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DnsimpleConfig`] and [`DnsimpleConfigBuilder`]
//! - Validated newtypes for the access token and base URLs
//! - A pluggable [`Transport`] with a reqwest-backed default
//! - Typed errors that separate API failures from transport failures
//! - One handle per endpoint group, reached from [`Client`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dnsimple::{AccessToken, Client, DnsimpleConfig};
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("your-oauth-token").unwrap())
//!     .sandbox()
//!     .build();
//!
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.http_client().base_url(), "https://api.sandbox.dnsimple.com");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use dnsimple::{Client, ListOptions};
//!
//! let whoami = client.identity().whoami().await?;
//! let account_id = whoami
//!     .data()
//!     .and_then(|d| d.account.as_ref())
//!     .and_then(|a| a.id)
//!     .map(|id| id.to_string())
//!     .unwrap_or_default();
//!
//! let options = ListOptions::new().page(2).sort("expires_on:asc");
//! let domains = client.domains().list_domains(&account_id, Some(&options)).await?;
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses become [`HttpError::Api`]:
//!
//! ```rust,ignore
//! use dnsimple::{ApiError, HttpError};
//!
//! match client.zones().get_zone("1010", "missing.com").await {
//!     Err(HttpError::Api(ApiError::NotFound { message })) => println!("{message}"),
//!     Err(HttpError::Api(ApiError::ValidationFailed { errors, .. })) => println!("{errors:?}"),
//!     Err(other) => return Err(other.into()),
//!     Ok(response) => println!("{:?}", response.data()),
//! }
//! ```
//!
//! ## Logging
//!
//! Requests and responses are traced with the `tracing` crate: outgoing
//! requests and statuses at `debug`, API errors at `warn` and undecodable
//! bodies at `error`. Install any subscriber to see them.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, DnsimpleConfig, DnsimpleConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Client, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, ReqwestTransport, Transport, TransportError,
    TransportRequest,
};

// Re-export REST types
pub use rest::{EmptyResponse, Filter, ListOptions, Pagination, RequestInfo, Response};
