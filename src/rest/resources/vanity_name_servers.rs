//! Vanity name server endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError};
use crate::rest::{EmptyResponse, Response};

/// A vanity name server and its glue addresses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NameServer {
    pub id: Option<u64>,
    /// Host name, e.g. `ns1.example.com`.
    pub name: Option<String>,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Vanity name server endpoints, reached through [`Client::vanity_name_servers`].
#[derive(Clone, Copy, Debug)]
pub struct VanityNameServers<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the vanity name server endpoints.
    #[must_use]
    pub const fn vanity_name_servers(&self) -> VanityNameServers<'_> {
        VanityNameServers { client: self }
    }
}

impl VanityNameServers<'_> {
    /// `PUT /{account}/vanity/{domain}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn enable_vanity_name_servers(
        &self,
        account_id: &str,
        domain_id: &str,
    ) -> Result<Response<Vec<NameServer>>, HttpError> {
        self.client
            .put(&format!("{account_id}/vanity/{domain_id}"), None)
            .await
    }

    /// `DELETE /{account}/vanity/{domain}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn disable_vanity_name_servers(
        &self,
        account_id: &str,
        domain_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!("{account_id}/vanity/{domain_id}"))
            .await
    }
}
