//! HTTP-specific error types for the DNSimple client.
//!
//! # Error Handling
//!
//! Every call returns [`HttpError`], which separates failures by where they
//! happened:
//!
//! - [`InvalidHttpRequestError`]: The request failed validation before sending
//! - [`TransportError`]: The request never produced an HTTP response
//! - [`ApiError`]: The API answered with a non-2xx status
//! - [`HttpError::Deserialize`]: A 2xx body did not match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::clients::{ApiError, HttpError};
//!
//! match client.contacts().get_contact("1010", "2").await {
//!     Ok(response) => println!("Contact: {:?}", response.data()),
//!     Err(HttpError::Api(ApiError::NotFound { message })) => {
//!         println!("Missing: {message}");
//!     }
//!     Err(HttpError::Api(ApiError::ValidationFailed { errors, .. })) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent over the wire.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidMethod {
///     method: "TRACE".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Invalid Http method TRACE.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Invalid Http method {method}.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// The request path was empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that rejected the body.
        method: String,
    },

    /// The attributes could not be serialized to JSON.
    #[error("Cannot serialize request body: {message}")]
    InvalidBody {
        /// The serializer's error message.
        message: String,
    },
}

/// Error raised by a [`Transport`](crate::clients::Transport) when no HTTP
/// response could be obtained.
///
/// These are I/O-class failures and are never converted into [`ApiError`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// A network error from the underlying HTTP library.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Details reported by the transport.
        detail: String,
    },

    /// Any other transport failure (used by custom transports).
    #[error("Transport failure: {detail}")]
    Other {
        /// Details reported by the transport.
        detail: String,
    },
}

/// Error returned when the DNSimple API answers with a non-2xx status.
///
/// Use [`ApiError::from_http_response`] to classify a raw response.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::ApiError;
///
/// let error = ApiError::from_http_response(
///     404,
///     "404 Not Found",
///     r#"{"message":"Contact `2` not found"}"#,
/// );
/// assert!(matches!(error, ApiError::NotFound { .. }));
/// assert_eq!(error.message(), "Contact `2` not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// The message from the response body.
        message: String,
    },

    /// The API rejected the request with field-level errors.
    #[error("{message}")]
    ValidationFailed {
        /// The HTTP status code.
        status: u16,
        /// The top-level message from the response body.
        message: String,
        /// Field name to the ordered list of violations.
        errors: HashMap<String, Vec<String>>,
    },

    /// Any other error response.
    #[error("{message}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// The message from the body, or the status line when the body is unreadable.
        message: String,
    },
}

impl ApiError {
    /// Classifies an error response.
    ///
    /// - 404 -> `NotFound`
    /// - JSON body with an `errors` object -> `ValidationFailed`
    /// - JSON body without one -> `Response` with the body's `message`
    /// - Malformed or non-JSON body -> `Response` with the status line as message
    #[must_use]
    pub fn from_http_response(status: u16, status_line: &str, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let Some(json) = parsed.filter(serde_json::Value::is_object) else {
            if status == 404 {
                return Self::NotFound {
                    message: status_line.to_string(),
                };
            }
            return Self::Response {
                status,
                message: status_line.to_string(),
            };
        };

        let message = json
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| status_line.to_string(), ToString::to_string);

        if status == 404 {
            return Self::NotFound { message };
        }

        match json.get("errors") {
            Some(serde_json::Value::Object(map)) => Self::ValidationFailed {
                status,
                message,
                errors: parse_field_errors(map),
            },
            _ => Self::Response { status, message },
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::ValidationFailed { status, .. } | Self::Response { status, .. } => *status,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::ValidationFailed { message, .. }
            | Self::Response { message, .. } => message,
        }
    }

    /// Returns the field-level violations, if any.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Normalizes each field's violations to a list of strings.
///
/// DNSimple returns `{"field": ["error1", "error2"]}`, but single string
/// values are accepted as well.
fn parse_field_errors(
    map: &serde_json::Map<String, serde_json::Value>,
) -> HashMap<String, Vec<String>> {
    map.iter()
        .map(|(field, messages)| {
            let msgs = match messages {
                serde_json::Value::Array(arr) => arr
                    .iter()
                    .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                    .collect(),
                serde_json::Value::String(s) => vec![s.clone()],
                other => vec![other.to_string()],
            };
            (field.clone(), msgs)
        })
        .collect()
}

/// Unified error type for every client call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// No HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body (status {status}): {message}")]
    Deserialize {
        /// The HTTP status code of the response.
        status: u16,
        /// The decoder's error message.
        message: String,
    },
}

impl HttpError {
    /// Returns `true` when the API reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(ApiError::NotFound { .. }))
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<ApiError>();
    assert_send_sync::<TransportError>();
    assert_send_sync::<InvalidHttpRequestError>();
};
