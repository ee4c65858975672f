//! One-click service endpoints.
//!
//! The service catalogue is global (`/services`); applying a service is
//! scoped to an account's domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A one-click service, such as a hosted mail or blog provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Service {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// The unique short name used in URLs.
    pub sid: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    /// Instructions shown when the service requires setup.
    pub setup_description: Option<String>,
    pub requires_setup: Option<bool>,
    /// Subdomain the service records are created under, if any.
    pub default_subdomain: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Settings the caller must supply when applying the service.
    pub settings: Option<Vec<ServiceSetting>>,
}

/// A setting required to apply a [`Service`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceSetting {
    pub name: Option<String>,
    pub label: Option<String>,
    pub append: Option<String>,
    pub description: Option<String>,
    pub example: Option<String>,
    pub password: Option<bool>,
}

/// Service endpoints, reached through [`Client::services`].
#[derive(Clone, Copy, Debug)]
pub struct Services<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the service endpoints.
    #[must_use]
    pub const fn services(&self) -> Services<'_> {
        Services { client: self }
    }
}

impl Services<'_> {
    /// `GET /services`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_services(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Service>>, HttpError> {
        self.client.get("services", options).await
    }

    /// `GET /services/{service}`. `service_id` is the ID or the short name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_service(&self, service_id: &str) -> Result<Response<Service>, HttpError> {
        self.client
            .get(&format!("services/{service_id}"), None)
            .await
    }

    /// `GET /{account}/domains/{domain}/services`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn applied_services(
        &self,
        account_id: &str,
        domain_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Service>>, HttpError> {
        self.client
            .get(&format!("{account_id}/domains/{domain_id}/services"), options)
            .await
    }

    /// `POST /{account}/domains/{domain}/services/{service}`.
    ///
    /// `settings` is sent as the body, e.g. `{"settings": {"app": "foo"}}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn apply_service<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        domain_id: &str,
        service_id: &str,
        settings: &B,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .post(
                &format!("{account_id}/domains/{domain_id}/services/{service_id}"),
                Some(json_body(settings)?),
            )
            .await
    }

    /// `DELETE /{account}/domains/{domain}/services/{service}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unapply_service(
        &self,
        account_id: &str,
        domain_id: &str,
        service_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!(
                "{account_id}/domains/{domain_id}/services/{service_id}"
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_without_settings() {
        let service: Service = serde_json::from_value(json!({
            "id": 1,
            "name": "Service 1",
            "sid": "service1",
            "short_name": "service1",
            "description": "First service example.",
            "setup_description": null,
            "requires_setup": false,
            "default_subdomain": null,
            "created_at": "2014-02-14T19:15:19Z",
            "updated_at": "2016-03-04T09:23:27Z",
            "settings": []
        }))
        .unwrap();

        assert_eq!(service.short_name.as_deref(), Some("service1"));
        assert!(service.setup_description.is_none());
        assert!(service.default_subdomain.is_none());
        assert_eq!(service.requires_setup, Some(false));
        assert_eq!(service.settings.map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_service_settings() {
        let service: Service = serde_json::from_value(json!({
            "id": 2,
            "requires_setup": true,
            "settings": [{
                "name": "username",
                "label": "Service 2 Account Username",
                "append": ".service2.com",
                "description": "Your Service2 username is used to connect services to your account.",
                "example": "username",
                "password": false
            }]
        }))
        .unwrap();

        let settings = service.settings.unwrap();
        assert_eq!(settings[0].name.as_deref(), Some("username"));
        assert_eq!(settings[0].password, Some(false));
    }
}
