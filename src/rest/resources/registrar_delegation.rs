//! Name server delegation endpoints.

use super::registrar::{registrar_path, Registrar};
use super::vanity_name_servers::NameServer;
use crate::clients::{json_body, HttpError};
use crate::rest::{EmptyResponse, Response};

impl Registrar<'_> {
    /// `GET /{account}/registrar/domains/{domain}/delegation`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_domain_delegation(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<Vec<String>>, HttpError> {
        self.client
            .get(&registrar_path(account_id, domain_name, "delegation"), None)
            .await
    }

    /// `PUT /{account}/registrar/domains/{domain}/delegation`.
    ///
    /// The body is the list of name server names.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn change_domain_delegation<S: AsRef<str>>(
        &self,
        account_id: &str,
        domain_name: &str,
        name_servers: &[S],
    ) -> Result<Response<Vec<String>>, HttpError> {
        let names: Vec<&str> = name_servers.iter().map(AsRef::as_ref).collect();
        self.client
            .put(
                &registrar_path(account_id, domain_name, "delegation"),
                Some(json_body(&names)?),
            )
            .await
    }

    /// `PUT /{account}/registrar/domains/{domain}/delegation/vanity`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn change_domain_delegation_to_vanity<S: AsRef<str>>(
        &self,
        account_id: &str,
        domain_name: &str,
        name_servers: &[S],
    ) -> Result<Response<Vec<NameServer>>, HttpError> {
        let names: Vec<&str> = name_servers.iter().map(AsRef::as_ref).collect();
        self.client
            .put(
                &registrar_path(account_id, domain_name, "delegation/vanity"),
                Some(json_body(&names)?),
            )
            .await
    }

    /// `DELETE /{account}/registrar/domains/{domain}/delegation/vanity`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn change_domain_delegation_from_vanity(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<EmptyResponse, HttpError> {
        self.client
            .delete(&registrar_path(account_id, domain_name, "delegation/vanity"))
            .await
    }
}

