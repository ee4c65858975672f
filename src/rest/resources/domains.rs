//! Domain endpoints.
//!
//! Email forwards and pushes are nested under domains and live in
//! [`domain_email_forwards`](super::domain_email_forwards) and
//! [`domain_pushes`](super::domain_pushes); their methods are on the same
//! [`Domains`] handle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A domain in an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Domain {
    /// The domain ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The owning account ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub account_id: Option<u64>,

    /// The registrant contact, for registered domains.
    #[serde(skip_serializing)]
    pub registrant_id: Option<u64>,

    /// The ASCII domain name. The only attribute accepted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing)]
    pub unicode_name: Option<String>,

    /// The domain token, used to share access with other accounts.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// One of `hosted`, `registered`, `expired`, ...
    #[serde(skip_serializing)]
    pub state: Option<String>,

    #[serde(skip_serializing)]
    pub auto_renew: Option<bool>,

    #[serde(skip_serializing)]
    pub private_whois: Option<bool>,

    /// Expiration date, for registered domains.
    #[serde(skip_serializing)]
    pub expires_on: Option<NaiveDate>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Domain endpoints, reached through [`Client::domains`].
#[derive(Clone, Copy, Debug)]
pub struct Domains<'a> {
    pub(super) client: &'a Client,
}

impl Client {
    /// Returns the domain endpoints, including email forwards and pushes.
    #[must_use]
    pub const fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }
}

impl Domains<'_> {
    /// `GET /{account}/domains`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_domains(
        &self,
        account_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Domain>>, HttpError> {
        self.client
            .get(&format!("{account_id}/domains"), options)
            .await
    }

    /// `GET /{account}/domains/{domain}`. `domain_id` is the ID or the name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_domain(
        &self,
        account_id: &str,
        domain_id: &str,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .get(&format!("{account_id}/domains/{domain_id}"), None)
            .await
    }

    /// `POST /{account}/domains`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_domain<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        attributes: &B,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .post(&format!("{account_id}/domains"), Some(json_body(attributes)?))
            .await
    }

    /// `DELETE /{account}/domains/{domain}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_domain(
        &self,
        account_id: &str,
        domain_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/domains/{domain_id}"))
            .await
    }

    /// `POST /{account}/domains/{domain}/token`. Returns the domain with its new token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reset_domain_token(
        &self,
        account_id: &str,
        domain_id: &str,
    ) -> Result<Response<Domain>, HttpError> {
        self.client
            .post(&format!("{account_id}/domains/{domain_id}/token"), None)
            .await
    }
}
