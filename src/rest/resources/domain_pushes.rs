//! Domain push endpoints: moving a domain to another account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domains::Domains;
use crate::clients::{json_body, HttpError};
use crate::rest::{EmptyResponse, Response};

/// A pending transfer of a domain between accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Push {
    pub id: Option<u64>,
    pub domain_id: Option<u64>,
    /// Contact assigned on acceptance; unset while pending.
    pub contact_id: Option<u64>,
    /// The receiving account.
    pub account_id: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Unset while the push is pending.
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Domains<'_> {
    /// `POST /{account}/domains/{domain}/pushes`.
    ///
    /// The attributes carry `new_account_email`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn initiate_push<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_id: &str,
        attributes: &B,
    ) -> Result<Response<Push>, HttpError> {
        self.client
            .post(
                &format!("{account_id}/domains/{domain_id}/pushes"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `GET /{account}/pushes`. Pushes waiting for this account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_pushes(&self, account_id: &str) -> Result<Response<Vec<Push>>, HttpError> {
        self.client
            .get(&format!("{account_id}/pushes"), None)
            .await
    }

    /// `POST /{account}/pushes/{push}`.
    ///
    /// The attributes carry the `contact_id` to assign to the domain.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn accept_push<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        push_id: &str,
        attributes: &B,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .post(
                &format!("{account_id}/pushes/{push_id}"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `DELETE /{account}/pushes/{push}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reject_push(
        &self,
        account_id: &str,
        push_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/pushes/{push_id}"))
            .await
    }
}
