//! Contact endpoints.
//!
//! Contacts hold the registrant details used when registering or
//! transferring domains.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::resources::Contact;
//!
//! let contact = Contact {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Smith".to_string()),
//!     ..Default::default()
//! };
//! let created = client.contacts().create_contact("1010", &contact).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A registrant contact.
///
/// Serializing a `Contact` produces the attributes accepted by create and
/// update: read-only fields are skipped and unset fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Contact {
    /// The contact ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The owning account ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub account_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// When the contact was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the contact was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Contact endpoints, reached through [`Client::contacts`].
#[derive(Clone, Copy, Debug)]
pub struct Contacts<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the contact endpoints.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }
}

impl Contacts<'_> {
    /// `GET /{account}/contacts`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_contacts(
        &self,
        account_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Contact>>, HttpError> {
        self.client
            .get(&format!("{account_id}/contacts"), options)
            .await
    }

    /// `GET /{account}/contacts/{contact}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; a missing contact is
    /// [`ApiError::NotFound`](crate::clients::ApiError::NotFound).
    pub async fn get_contact(
        &self,
        account_id: &str,
        contact_id: &str,
    ) -> Result<Response<Contact>, HttpError> {
        self.client
            .get(&format!("{account_id}/contacts/{contact_id}"), None)
            .await
    }

    /// `POST /{account}/contacts`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_contact<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        attributes: &B,
    ) -> Result<Response<Contact>, HttpError> {
        self.client
            .post(&format!("{account_id}/contacts"), Some(json_body(attributes)?))
            .await
    }

    /// `PATCH /{account}/contacts/{contact}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_contact<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        contact_id: &str,
        attributes: &B,
    ) -> Result<Response<Contact>, HttpError> {
        self.client
            .patch(
                &format!("{account_id}/contacts/{contact_id}"),
                json_body(attributes)?,
            )
            .await
    }

    /// `DELETE /{account}/contacts/{contact}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_contact(
        &self,
        account_id: &str,
        contact_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/contacts/{contact_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_deserialization_keeps_empty_strings() {
        let contact: Contact = serde_json::from_value(json!({
            "id": 1,
            "account_id": 1010,
            "label": "Default",
            "first_name": "First",
            "last_name": "User",
            "job_title": "CEO",
            "organization_name": "Awesome Company",
            "email": "first@example.com",
            "phone": "+18001234567",
            "fax": "+18011234567",
            "address1": "Italian Street, 10",
            "address2": "",
            "city": "Roma",
            "state_province": "RM",
            "postal_code": "00100",
            "country": "IT",
            "created_at": "2016-01-19T20:50:26Z",
            "updated_at": "2016-01-19T20:50:26Z"
        }))
        .unwrap();

        assert_eq!(contact.id, Some(1));
        assert_eq!(contact.account_id, Some(1010));
        assert_eq!(contact.address2.as_deref(), Some(""));
        assert_eq!(contact.state_province.as_deref(), Some("RM"));
        assert!(contact.created_at.is_some());
    }

    #[test]
    fn test_contact_serialization_omits_read_only_and_unset_fields() {
        let contact = Contact {
            id: Some(1),
            first_name: Some("John".to_string()),
            last_name: Some("Smith".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({"first_name": "John", "last_name": "Smith"})
        );
    }
}
