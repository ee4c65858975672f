//! Zone endpoints.
//!
//! Record endpoints are in [`zone_records`](super::zone_records) and share
//! the [`Zones`] handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError};
use crate::rest::{ListOptions, Response};

/// A DNS zone.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Zone {
    pub id: Option<u64>,
    pub account_id: Option<u64>,
    pub name: Option<String>,
    /// `true` for zones delegated to other name servers.
    pub reverse: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A zone rendered in BIND zone-file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ZoneFile {
    /// The zone file contents.
    pub zone: Option<String>,
}

/// Zone endpoints, reached through [`Client::zones`].
#[derive(Clone, Copy, Debug)]
pub struct Zones<'a> {
    pub(super) client: &'a Client,
}

impl Client {
    /// Returns the zone endpoints, including zone records.
    #[must_use]
    pub const fn zones(&self) -> Zones<'_> {
        Zones { client: self }
    }
}

impl Zones<'_> {
    /// `GET /{account}/zones`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_zones(
        &self,
        account_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Zone>>, HttpError> {
        self.client
            .get(&format!("{account_id}/zones"), options)
            .await
    }

    /// `GET /{account}/zones/{zone}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_zone(
        &self,
        account_id: &str,
        zone_id: &str,
    ) -> Result<Response<Zone>, HttpError> {
        self.client
            .get(&format!("{account_id}/zones/{zone_id}"), None)
            .await
    }

    /// `GET /{account}/zones/{zone}/file`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_zone_file(
        &self,
        account_id: &str,
        zone_id: &str,
    ) -> Result<Response<ZoneFile>, HttpError> {
        self.client
            .get(&format!("{account_id}/zones/{zone_id}/file"), None)
            .await
    }
}
