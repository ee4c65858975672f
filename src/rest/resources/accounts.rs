//! Account endpoints and the `Account`/`User` entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError};
use crate::rest::Response;

/// A DNSimple account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Account {
    /// The account ID.
    pub id: Option<u64>,
    /// The account email.
    pub email: Option<String>,
    /// The plan identifier, e.g. `dnsimple-personal`.
    pub plan_identifier: Option<String>,
    /// When the account was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A DNSimple user, returned by `whoami` for user credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The user ID.
    pub id: Option<u64>,
    /// The user email.
    pub email: Option<String>,
    /// When the user was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the user was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Account endpoints, reached through [`Client::accounts`].
#[derive(Clone, Copy, Debug)]
pub struct Accounts<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the account endpoints.
    #[must_use]
    pub const fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }
}

impl Accounts<'_> {
    /// Lists the accounts the current credentials can access.
    ///
    /// `GET /accounts`. Account tokens see a single account; user tokens see
    /// every account the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_accounts(&self) -> Result<Response<Vec<Account>>, HttpError> {
        self.client.get("accounts", None).await
    }
}
