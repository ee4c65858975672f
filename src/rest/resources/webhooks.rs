//! Webhook endpoints.

use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A webhook subscription. DNSimple posts account events to `url`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Webhook endpoints, reached through [`Client::webhooks`].
#[derive(Clone, Copy, Debug)]
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the webhook endpoints.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }
}

impl Webhooks<'_> {
    /// `GET /{account}/webhooks`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_webhooks(
        &self,
        account_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Webhook>>, HttpError> {
        self.client
            .get(&format!("{account_id}/webhooks"), options)
            .await
    }

    /// `GET /{account}/webhooks/{webhook}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_webhook(
        &self,
        account_id: &str,
        webhook_id: &str,
    ) -> Result<Response<Webhook>, HttpError> {
        self.client
            .get(&format!("{account_id}/webhooks/{webhook_id}"), None)
            .await
    }

    /// `POST /{account}/webhooks`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_webhook<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        attributes: &B,
    ) -> Result<Response<Webhook>, HttpError> {
        self.client
            .post(&format!("{account_id}/webhooks"), Some(json_body(attributes)?))
            .await
    }

    /// `DELETE /{account}/webhooks/{webhook}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_webhook(
        &self,
        account_id: &str,
        webhook_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/webhooks/{webhook_id}"))
            .await
    }
}
