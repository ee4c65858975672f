//! HTTP request types for the DNSimple client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the versioned API.

use std::fmt;
use std::str::FromStr;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::ListOptions;

/// Version segment prefixed to every request path.
pub const API_VERSION_PATH: &str = "v2";

/// HTTP methods supported by the DNSimple API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for enabling features and replacing state.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources and disabling features.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// An HTTP request to be sent to the DNSimple API.
///
/// Immutable once built. Use [`HttpRequest::builder`] to construct one.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::{HttpMethod, HttpRequest};
/// use dnsimple::ListOptions;
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "1010/contacts")
///     .list_options(Some(&ListOptions::new().sort("last_name:asc")))
///     .build()
///     .unwrap();
/// assert_eq!(
///     request.url("https://api.dnsimple.com"),
///     "https://api.dnsimple.com/v2/1010/contacts?sort=last_name%3Aasc"
/// );
///
/// let request = HttpRequest::builder(HttpMethod::Patch, "1010/contacts/1")
///     .body(json!({"first_name": "John"}))
///     .build()
///     .unwrap();
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the versioned base URL.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `body` is `Some` for a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Builds the absolute URL: `<base_url>/v2/<path>[?<query>]`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        let mut url = format!("{base}/{API_VERSION_PATH}/{path}");
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query_string());
        }
        url
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the request body. It is sent as JSON.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends the parameters derived from list options.
    ///
    /// The filter comes first, then `page`, `per_page` and `sort`.
    #[must_use]
    pub fn list_options(mut self, options: Option<&ListOptions>) -> Self {
        if let Some(options) = options {
            self.query.extend(options.query_pairs());
        }
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Filter;
    use serde_json::json;

    #[test]
    fn test_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_method_from_str_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!("DELETE".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn test_unsupported_method_is_rejected() {
        let result = "TRACE".parse::<HttpMethod>();
        assert_eq!(
            result,
            Err(InvalidHttpRequestError::InvalidMethod {
                method: "TRACE".to_string()
            })
        );
    }

    #[test]
    fn test_url_prefixes_version_segment() {
        let request = HttpRequest::builder(HttpMethod::Get, "1010/zones/example.com/records")
            .build()
            .unwrap();
        assert_eq!(
            request.url("https://api.dnsimple.com"),
            "https://api.dnsimple.com/v2/1010/zones/example.com/records"
        );
    }

    #[test]
    fn test_page_option_is_the_only_query_parameter() {
        let request = HttpRequest::builder(HttpMethod::Get, "1/contacts")
            .list_options(Some(&ListOptions::new().page(1)))
            .build()
            .unwrap();
        assert_eq!(request.query_string(), "page=1");
        assert_eq!(
            request.url("https://api.dnsimple.com"),
            "https://api.dnsimple.com/v2/1/contacts?page=1"
        );
    }

    #[test]
    fn test_filter_precedes_other_options() {
        let options = ListOptions::new()
            .sort("expires_on:asc")
            .page(2)
            .filter(Filter::new("name_like", "example"));
        let request = HttpRequest::builder(HttpMethod::Get, "1/domains")
            .list_options(Some(&options))
            .build()
            .unwrap();
        assert_eq!(
            request.query_string(),
            "name_like=example&page=2&sort=expires_on%3Aasc"
        );
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let request = HttpRequest::builder(HttpMethod::Get, "1/zones")
            .query_param("name_like", "my zone")
            .build()
            .unwrap();
        assert_eq!(request.query_string(), "name_like=my%20zone");
    }

    #[test]
    fn test_no_options_means_no_query_string() {
        let request = HttpRequest::builder(HttpMethod::Get, "accounts")
            .list_options(None)
            .build()
            .unwrap();
        assert!(!request.url("https://api.dnsimple.com").contains('?'));
    }

    #[test]
    fn test_body_is_kept_unchanged() {
        let request = HttpRequest::builder(HttpMethod::Patch, "1010/contacts/1")
            .body(json!({"first_name": "John"}))
            .build()
            .unwrap();
        assert_eq!(request.body, Some(json!({"first_name": "John"})));
    }

    #[test]
    fn test_post_without_body_is_valid() {
        let result = HttpRequest::builder(HttpMethod::Post, "1010/domains/example.com/token")
            .build();
        assert!(result.is_ok());
        assert!(result.unwrap().body.is_none());
    }

    #[test]
    fn test_get_with_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "whoami")
            .body(json!({}))
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { .. })
        ));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();
        assert_eq!(result, Err(InvalidHttpRequestError::EmptyPath));
    }
}
