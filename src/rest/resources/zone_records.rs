//! Zone record endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::zones::Zones;
use crate::clients::{json_body, HttpError};
use crate::rest::{EmptyResponse, ListOptions, Response};

/// A DNS record in a zone.
///
/// Serializing a `ZoneRecord` produces the attributes accepted by create
/// and update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ZoneRecord {
    /// The record ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The zone name.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub zone_id: Option<String>,

    /// The parent record, for records created by a service or template.
    #[serde(skip_serializing)]
    pub parent_id: Option<u64>,

    /// The record name, without the zone. Empty for the apex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Priority, for MX and SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// The record type, e.g. `A` or `MX`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Region codes the record is served from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,

    /// `true` for records managed by DNSimple (SOA, NS).
    #[serde(skip_serializing)]
    pub system_record: Option<bool>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Zones<'_> {
    /// `GET /{account}/zones/{zone}/records`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_zone_records(
        &self,
        account_id: &str,
        zone_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<ZoneRecord>>, HttpError> {
        self.client
            .get(&format!("{account_id}/zones/{zone_id}/records"), options)
            .await
    }

    /// `GET /{account}/zones/{zone}/records/{record}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_zone_record(
        &self,
        account_id: &str,
        zone_id: &str,
        record_id: &str,
    ) -> Result<Response<ZoneRecord>, HttpError> {
        self.client
            .get(
                &format!("{account_id}/zones/{zone_id}/records/{record_id}"),
                None,
            )
            .await
    }

    /// `POST /{account}/zones/{zone}/records`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_zone_record<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        zone_id: &str,
        attributes: &B,
    ) -> Result<Response<ZoneRecord>, HttpError> {
        self.client
            .post(
                &format!("{account_id}/zones/{zone_id}/records"),
                Some(json_body(attributes)?),
            )
            .await
    }

    /// `PATCH /{account}/zones/{zone}/records/{record}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_zone_record<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        zone_id: &str,
        record_id: &str,
        attributes: &B,
    ) -> Result<Response<ZoneRecord>, HttpError> {
        self.client
            .patch(
                &format!("{account_id}/zones/{zone_id}/records/{record_id}"),
                json_body(attributes)?,
            )
            .await
    }

    /// `DELETE /{account}/zones/{zone}/records/{record}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_zone_record(
        &self,
        account_id: &str,
        zone_id: &str,
        record_id: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&format!(
                "{account_id}/zones/{zone_id}/records/{record_id}"
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zone_record_with_null_parent_and_priority() {
        let record: ZoneRecord = serde_json::from_value(json!({
            "id": 64784,
            "zone_id": "example.com",
            "parent_id": null,
            "name": "www",
            "content": "127.0.0.1",
            "ttl": 600,
            "priority": null,
            "type": "A",
            "regions": ["global"],
            "system_record": false,
            "created_at": "2016-01-07T17:45:13Z",
            "updated_at": "2016-01-07T17:45:13Z"
        }))
        .unwrap();

        assert_eq!(record.zone_id.as_deref(), Some("example.com"));
        assert!(record.parent_id.is_none());
        assert!(record.priority.is_none());
        assert_eq!(record.record_type.as_deref(), Some("A"));
        assert_eq!(record.ttl, Some(600));
        assert_eq!(record.system_record, Some(false));
    }

    #[test]
    fn test_zone_record_attributes_use_type_key() {
        let record = ZoneRecord {
            name: Some(String::new()),
            record_type: Some("MX".to_string()),
            content: Some("mx.example.com".to_string()),
            priority: Some(10),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "", "type": "MX", "content": "mx.example.com", "priority": 10})
        );
    }
}
