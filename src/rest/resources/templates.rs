//! Template endpoints.
//!
//! A template is a reusable set of records that can be applied to any
//! domain in the account. Its records are managed through
//! [`template_records`](super::template_records).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A record template.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Template {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub account_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unique identifier within the account, usable in place of the ID.
    #[serde(rename = "sid", alias = "short_name", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Template endpoints, reached through [`Client::templates`].
#[derive(Clone, Copy, Debug)]
pub struct Templates<'a> {
    pub(super) client: &'a Client,
}

impl Client {
    /// Returns the template endpoints, including template records.
    #[must_use]
    pub const fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }
}

impl Templates<'_> {
    /// `GET /{account}/templates`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_templates(
        &self,
        account_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Template>>, HttpError> {
        self.client
            .get(&format!("{account_id}/templates"), options)
            .await
    }

    /// `GET /{account}/templates/{template}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_template(
        &self,
        account_id: &str,
        template_id: &str,
    ) -> Result<Response<Template>, HttpError> {
        self.client
            .get(&format!("{account_id}/templates/{template_id}"), None)
            .await
    }

    /// `POST /{account}/templates`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_template<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        attributes: &B,
    ) -> Result<Response<Template>, HttpError> {
        self.client
            .post(&format!("{account_id}/templates"), Some(json_body(attributes)?))
            .await
    }

    /// `PATCH /{account}/templates/{template}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_template<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        template_id: &str,
        attributes: &B,
    ) -> Result<Response<Template>, HttpError> {
        self.client
            .patch(
                &format!("{account_id}/templates/{template_id}"),
                json_body(attributes)?,
            )
            .await
    }

    /// `DELETE /{account}/templates/{template}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_template(
        &self,
        account_id: &str,
        template_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/templates/{template_id}"))
            .await
    }

    /// `POST /{account}/domains/{domain}/templates/{template}`. Sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn apply_template(
        &self,
        account_id: &str,
        domain_id: &str,
        template_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .post(
                &format!("{account_id}/domains/{domain_id}/templates/{template_id}"),
                None,
            )
            .await
    }
}
