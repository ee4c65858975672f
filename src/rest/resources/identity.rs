//! The identity endpoint.

use serde::{Deserialize, Serialize};

use super::accounts::{Account, User};
use crate::clients::{Client, HttpError};
use crate::rest::Response;

/// Who the current credentials belong to.
///
/// Account tokens set `account` and leave `user` unset; user tokens do the
/// opposite.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WhoamiData {
    /// The authenticated account, for account credentials.
    pub account: Option<Account>,
    /// The authenticated user, for user credentials.
    pub user: Option<User>,
}

/// Identity endpoint, reached through [`Client::identity`].
#[derive(Clone, Copy, Debug)]
pub struct Identity<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the identity endpoint.
    #[must_use]
    pub const fn identity(&self) -> Identity<'_> {
        Identity { client: self }
    }
}

impl Identity<'_> {
    /// `GET /whoami`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn whoami(&self) -> Result<Response<WhoamiData>, HttpError> {
        self.client.get("whoami", None).await
    }
}
