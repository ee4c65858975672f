//! Response envelope for DNSimple API calls.
//!
//! This module provides [`Response<T>`], which combines the decoded payload
//! with the pagination block and the raw request/response metadata.
//!
//! DNSimple wraps payloads in an envelope:
//!
//! ```json
//! {
//!   "data": [{"id": 1}, {"id": 2}],
//!   "pagination": {"current_page": 1, "per_page": 30, "total_entries": 2, "total_pages": 1}
//! }
//! ```
//!
//! Action endpoints often answer `204 No Content`. An empty body is not an
//! error; it yields a response whose `data()` is `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = client.zones().list_zones("1010", None).await?;
//!
//! for zone in response.data().into_iter().flatten() {
//!     println!("{:?}", zone.name);
//! }
//!
//! if let Some(pagination) = response.pagination() {
//!     println!("page {:?} of {:?}", pagination.current_page, pagination.total_pages);
//! }
//! ```

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpMethod, HttpResponse};

/// Pagination block returned by list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The current page, starting at 1.
    pub current_page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
    /// Total number of items across all pages.
    pub total_entries: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u64>,
}

/// The request that produced a [`Response`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestInfo {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including the query string.
    pub url: String,
    /// The JSON body that was sent, if any.
    pub body: Option<String>,
}

/// A response from a DNSimple endpoint.
///
/// # Type Parameters
///
/// * `T` - The payload type. For collections this is `Vec<Entity>`.
///   Endpoints that return no payload use [`EmptyResponse`].
#[derive(Clone, Debug)]
pub struct Response<T> {
    data: Option<T>,
    pagination: Option<Pagination>,
    request: RequestInfo,
    http_response: HttpResponse,
}

/// A response for endpoints whose payload callers are not expected to read.
pub type EmptyResponse = Response<IgnoredAny>;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    pagination: Option<Pagination>,
}

impl<T> Response<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: Option<T>,
        pagination: Option<Pagination>,
        request: RequestInfo,
        http_response: HttpResponse,
    ) -> Self {
        Self {
            data,
            pagination,
            request,
            http_response,
        }
    }

    /// Returns the payload, or `None` when the API sent none.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the response and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns the pagination block, if present.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns the originating request.
    #[must_use]
    pub const fn request(&self) -> &RequestInfo {
        &self.request
    }

    /// Returns the raw HTTP response.
    #[must_use]
    pub const fn http_response(&self) -> &HttpResponse {
        &self.http_response
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.http_response.code
    }

    /// Maps the payload to a different type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: self.data.map(f),
            pagination: self.pagination,
            request: self.request,
            http_response: self.http_response,
        }
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Decodes an enveloped body (`{"data": ..., "pagination": ...}`).
    ///
    /// An empty body yields `data == None` and `pagination == None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Deserialize`] if the body does not match the envelope.
    pub fn from_http_response(
        request: RequestInfo,
        http_response: HttpResponse,
    ) -> Result<Self, HttpError> {
        if http_response.has_empty_body() {
            tracing::debug!(
                url = %request.url,
                status = http_response.code,
                "Empty response body, payload left unset"
            );
            return Ok(Self::new(None, None, request, http_response));
        }

        let envelope: Envelope<T> = decode(&http_response)?;
        Ok(Self::new(
            envelope.data,
            envelope.pagination,
            request,
            http_response,
        ))
    }

    /// Decodes a body whose top-level object is the payload itself.
    ///
    /// Used by the OAuth token exchange, which is not enveloped.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Deserialize`] if the body does not match `T`.
    pub fn from_unwrapped_http_response(
        request: RequestInfo,
        http_response: HttpResponse,
    ) -> Result<Self, HttpError> {
        if http_response.has_empty_body() {
            return Ok(Self::new(None, None, request, http_response));
        }

        let data: T = decode(&http_response)?;
        Ok(Self::new(Some(data), None, request, http_response))
    }
}

fn decode<U: DeserializeOwned>(http_response: &HttpResponse) -> Result<U, HttpError> {
    serde_json::from_str(&http_response.body).map_err(|e| {
        tracing::error!(status = http_response.code, "Failed to decode response body: {e}");
        HttpError::Deserialize {
            status: http_response.code,
            message: e.to_string(),
        }
    })
}

// Verify Response is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Response<Vec<String>>>();
    assert_send_sync::<EmptyResponse>();
};
