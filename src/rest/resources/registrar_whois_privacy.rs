//! WHOIS privacy endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::registrar::{registrar_path, Registrar};
use crate::clients::HttpError;
use crate::rest::Response;

/// WHOIS privacy protection for a registered domain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WhoisPrivacy {
    pub id: Option<u64>,
    pub domain_id: Option<u64>,
    pub expires_on: Option<NaiveDate>,
    pub enabled: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Registrar<'_> {
    /// `GET /{account}/registrar/domains/{domain}/whois_privacy`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_whois_privacy(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<WhoisPrivacy>, HttpError> {
        self.client
            .get(&registrar_path(account_id, domain_name, "whois_privacy"), None)
            .await
    }

    /// `PUT /{account}/registrar/domains/{domain}/whois_privacy`.
    ///
    /// Answers 201 when the service is purchased and 200 when it was
    /// already owned; both carry the privacy record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn enable_whois_privacy(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<WhoisPrivacy>, HttpError> {
        self.client
            .put(&registrar_path(account_id, domain_name, "whois_privacy"), None)
            .await
    }

    /// `DELETE /{account}/registrar/domains/{domain}/whois_privacy`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn disable_whois_privacy(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<WhoisPrivacy>, HttpError> {
        self.client
            .delete(&registrar_path(account_id, domain_name, "whois_privacy"))
            .await
    }
}
