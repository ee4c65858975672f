//! Template record endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::templates::Templates;
use crate::clients::{json_body, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A record inside a [`Template`](super::templates::Template).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TemplateRecord {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub template_id: Option<u64>,
    /// Empty for the apex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Templates<'_> {
    /// `GET /{account}/templates/{template}/records`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_template_records(
        &self,
        account_id: &str,
        template_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<TemplateRecord>>, HttpError> {
        self.client
            .get(
                &format!("{account_id}/templates/{template_id}/records"),
                options,
            )
            .await
    }

    /// `GET /{account}/templates/{template}/records/{record}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_template_record(
        &self,
        account_id: &str,
        template_id: &str,
        record_id: &str,
    ) -> Result<Response<TemplateRecord>, HttpError> {
        self.client
            .get(
                &format!("{account_id}/templates/{template_id}/records/{record_id}"),
                None,
            )
            .await
    }

    /// `POST /{account}/templates/{template}/records`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_template_record<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        template_id: &str,
        attributes: &B,
    ) -> Result<Response<TemplateRecord>, HttpError> {
        self.client
            .post(
                &format!("{account_id}/templates/{template_id}/records"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `DELETE /{account}/templates/{template}/records/{record}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_template_record(
        &self,
        account_id: &str,
        template_id: &str,
        record_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!(
                "{account_id}/templates/{template_id}/records/{record_id}"
            ))
            .await
    }
}
