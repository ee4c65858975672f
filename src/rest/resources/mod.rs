//! DNSimple API v2 resources.
//!
//! Each endpoint group is a small handle borrowing the [`Client`](crate::Client),
//! obtained from an accessor such as `client.zones()` or `client.registrar()`.
//! Handles hold no state of their own, so they are `Copy` and cheap to create
//! per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::{Client, DnsimpleConfig, ListOptions};
//!
//! let client = Client::new(config)?;
//!
//! let options = ListOptions::new().sort("expires_on:asc");
//! let domains = client.domains().list_domains("1010", Some(&options)).await?;
//! for domain in domains.data().into_iter().flatten() {
//!     println!("{:?}", domain.name);
//! }
//! ```
//!
//! Identifiers are passed as `&str` and placed into the path as given.
//! Attribute bodies accept any `Serialize` value, including the entity
//! structs below (read-only fields are never sent) and `serde_json::Value`.

mod accounts;
mod contacts;
mod domain_email_forwards;
mod domain_pushes;
mod domains;
mod identity;
mod oauth;
mod registrar;
mod registrar_delegation;
mod registrar_whois_privacy;
mod services;
mod template_records;
mod templates;
mod tlds;
mod vanity_name_servers;
mod webhooks;
mod zone_records;
mod zones;

pub use accounts::{Account, Accounts, User};
pub use contacts::{Contact, Contacts};
pub use domain_email_forwards::EmailForward;
pub use domain_pushes::Push;
pub use domains::{Domain, Domains};
pub use identity::{Identity, WhoamiData};
pub use oauth::{AuthorizeOptions, ExchangeOptions, Oauth, OauthToken, StateParam};
pub use registrar::{DomainAvailability, Registrar};
pub use registrar_whois_privacy::WhoisPrivacy;
pub use services::{Service, ServiceSetting, Services};
pub use template_records::TemplateRecord;
pub use templates::{Template, Templates};
pub use tlds::{Tld, TldExtendedAttribute, TldExtendedAttributeOption, Tlds};
pub use vanity_name_servers::{NameServer, VanityNameServers};
pub use webhooks::{Webhook, Webhooks};
pub use zone_records::ZoneRecord;
pub use zones::{Zone, ZoneFile, Zones};
