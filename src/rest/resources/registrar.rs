//! Registrar endpoints: availability, registration, renewal and transfers.
//!
//! WHOIS privacy and delegation live in
//! [`registrar_whois_privacy`](super::registrar_whois_privacy) and
//! [`registrar_delegation`](super::registrar_delegation), on the same
//! [`Registrar`] handle.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let check = client.registrar().check_domain("1010", "example.com").await?;
//! if check.data().and_then(|a| a.available) == Some(true) {
//!     client
//!         .registrar()
//!         .register_domain("1010", "example.com", &json!({"registrant_id": 10}))
//!         .await?;
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::domains::Domain;
use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, Response};

/// Result of a domain availability check.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DomainAvailability {
    /// The domain that was checked.
    pub domain: Option<String>,
    /// `true` if the domain can be registered.
    pub available: Option<bool>,
    /// `true` if the domain is sold at a premium price.
    pub premium: Option<bool>,
}

/// Registrar endpoints, reached through [`Client::registrar`].
#[derive(Clone, Copy, Debug)]
pub struct Registrar<'a> {
    pub(super) client: &'a Client,
}

impl Client {
    /// Returns the registrar endpoints.
    #[must_use]
    pub const fn registrar(&self) -> Registrar<'_> {
        Registrar { client: self }
    }
}

pub(super) fn registrar_path(account_id: &str, domain_name: &str, action: &str) -> String {
    format!("{account_id}/registrar/domains/{domain_name}/{action}")
}

impl Registrar<'_> {
    /// `GET /{account}/registrar/domains/{domain}/check`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn check_domain(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<DomainAvailability>, HttpError> {
        self.client
            .get(&registrar_path(account_id, domain_name, "check"), None)
            .await
    }

    /// `POST /{account}/registrar/domains/{domain}/register`.
    ///
    /// The attributes must carry `registrant_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn register_domain<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_name: &str,
        attributes: &B,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .post(
                &registrar_path(account_id, domain_name, "register"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `POST /{account}/registrar/domains/{domain}/renewal`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails. Renewing too early is an
    /// [`ApiError::Response`](crate::clients::ApiError::Response) with status 400.
    pub async fn renew_domain<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_name: &str,
        attributes: &B,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .post(
                &registrar_path(account_id, domain_name, "renewal"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `POST /{account}/registrar/domains/{domain}/transfer`.
    ///
    /// The attributes carry `registrant_id` and, for most TLDs, `auth_code`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn transfer_domain<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_name: &str,
        attributes: &B,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .post(
                &registrar_path(account_id, domain_name, "transfer"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `POST /{account}/registrar/domains/{domain}/transfer_out`. Sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn transfer_domain_out(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .post(&registrar_path(account_id, domain_name, "transfer_out"), None)
            .await
    }

    /// `PUT /{account}/registrar/domains/{domain}/auto_renewal`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn enable_auto_renewal(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .put(&registrar_path(account_id, domain_name, "auto_renewal"), None)
            .await
    }

    /// `DELETE /{account}/registrar/domains/{domain}/auto_renewal`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn disable_auto_renewal(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&registrar_path(account_id, domain_name, "auto_renewal"))
            .await
    }
}
