//! REST layer for the DNSimple API.
//!
//! This module holds what the endpoint groups have in common:
//!
//! - **[`ListOptions`]** and **[`Filter`]**: pagination, sort and filter query parameters
//! - **[`Response<T>`]**: the decoded `data` envelope plus pagination and raw metadata
//! - **[`resources`]**: one handle per endpoint group (domains, zones, registrar, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::{Client, Filter, ListOptions};
//!
//! let options = ListOptions::new()
//!     .filter(Filter::new("name_like", "example"))
//!     .per_page(50);
//!
//! let response = client.zones().list_zones("1010", Some(&options)).await?;
//! println!("{} zones", response.data().map_or(0, Vec::len));
//! ```

mod options;
mod response;

pub mod resources;

pub use options::{Filter, ListOptions};
pub use response::{EmptyResponse, Pagination, RequestInfo, Response};
