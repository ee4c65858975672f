//! Top-level domain endpoints.
//!
//! TLD lookups are not scoped to an account.

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError};
use crate::rest::{ListOptions, Response};

/// A top-level domain supported by the registrar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tld {
    /// The TLD without the leading dot, e.g. `com`.
    pub tld: Option<String>,
    /// 1 for generic, 2 for country-code, 3 for new gTLDs.
    pub tld_type: Option<u32>,
    pub whois_privacy: Option<bool>,
    pub auto_renew_only: Option<bool>,
    pub idn: Option<bool>,
    /// Minimum registration period in years.
    pub minimum_registration: Option<u32>,
    pub registration_enabled: Option<bool>,
    pub renewal_enabled: Option<bool>,
    pub transfer_enabled: Option<bool>,
}

/// An extra registrant attribute required or accepted by some TLDs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TldExtendedAttribute {
    pub name: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Allowed values. Empty when the attribute is free-form.
    pub options: Option<Vec<TldExtendedAttributeOption>>,
}

/// One allowed value of a [`TldExtendedAttribute`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TldExtendedAttributeOption {
    pub title: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// TLD endpoints, reached through [`Client::tlds`].
#[derive(Clone, Copy, Debug)]
pub struct Tlds<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the TLD endpoints.
    #[must_use]
    pub const fn tlds(&self) -> Tlds<'_> {
        Tlds { client: self }
    }
}

impl Tlds<'_> {
    /// `GET /tlds`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_tlds(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Tld>>, HttpError> {
        self.client.get("tlds", options).await
    }

    /// `GET /tlds/{tld}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_tld(&self, tld: &str) -> Result<Response<Tld>, HttpError> {
        self.client.get(&format!("tlds/{tld}"), None).await
    }

    /// `GET /tlds/{tld}/extended_attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_tld_extended_attributes(
        &self,
        tld: &str,
    ) -> Result<Response<Vec<TldExtendedAttribute>>, HttpError> {
        self.client
            .get(&format!("tlds/{tld}/extended_attributes"), None)
            .await
    }
}
