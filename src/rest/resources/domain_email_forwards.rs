//! Email forward endpoints, nested under a domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domains::Domains;
use crate::clients::{json_body, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// An email forward from an address on the domain to another address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailForward {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub domain_id: Option<u64>,
    /// The local part or full source address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// The destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domains<'_> {
    /// `GET /{account}/domains/{domain}/email_forwards`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_email_forwards(
        &self,
        account_id: &str,
        domain_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<EmailForward>>, HttpError> {
        self.client
            .get(
                &format!("{account_id}/domains/{domain_id}/email_forwards"),
                options,
            )
            .await
    }

    /// `GET /{account}/domains/{domain}/email_forwards/{forward}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_email_forward(
        &self,
        account_id: &str,
        domain_id: &str,
        email_forward_id: &str,
    ) -> Result<Response<EmailForward>, HttpError> {
        self.client
            .get(
                &format!("{account_id}/domains/{domain_id}/email_forwards/{email_forward_id}"),
                None,
            )
            .await
    }

    /// `POST /{account}/domains/{domain}/email_forwards`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_email_forward<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_id: &str,
        attributes: &B,
    ) -> Result<Response<EmailForward>, HttpError> {
        self.client
            .post(
                &format!("{account_id}/domains/{domain_id}/email_forwards"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `DELETE /{account}/domains/{domain}/email_forwards/{forward}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_email_forward(
        &self,
        account_id: &str,
        domain_id: &str,
        email_forward_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!(
                "{account_id}/domains/{domain_id}/email_forwards/{email_forward_id}"
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_forward_serializes_only_writable_fields() {
        let forward: EmailForward = serde_json::from_value(json!({
            "id": 17706,
            "domain_id": 228963,
            "from": "jim@a-domain.com",
            "to": "jim@another.com",
            "created_at": "2016-02-04T14:26:50Z",
            "updated_at": "2016-02-04T14:26:50Z"
        }))
        .unwrap();

        assert_eq!(forward.id, Some(17706));
        assert_eq!(forward.domain_id, Some(228963));
        assert_eq!(
            serde_json::to_value(&forward).unwrap(),
            json!({"from": "jim@a-domain.com", "to": "jim@another.com"})
        );
    }
}
