//! OAuth 2 authorization code flow.
//!
//! # Overview
//!
//! A third-party application sends the user to [`Oauth::authorize_url`],
//! receives an authorization code on its redirect URI, and trades it for an
//! access token with [`Oauth::exchange_authorization_for_token`]. The token
//! response is a bare JSON object rather than a `data` envelope.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::rest::resources::{AuthorizeOptions, StateParam};
//! use dnsimple::{Client, DnsimpleConfig};
//!
//! let client = Client::new(DnsimpleConfig::default()).unwrap();
//! let state = StateParam::new();
//! let options = AuthorizeOptions {
//!     state: Some(state.to_string()),
//!     ..Default::default()
//! };
//!
//! let url = client.oauth().authorize_url("great-app", Some(&options));
//! assert!(url.starts_with("https://dnsimple.com/oauth/authorize?client_id=great-app"));
//! ```

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clients::{json_body, Client, HttpError, HttpMethod, HttpRequest};

/// Access token returned by the token exchange.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OauthToken {
    pub access_token: Option<String>,
    /// Always `Bearer`.
    pub token_type: Option<String>,
    pub scope: Option<String>,
    /// The account the token was granted for.
    pub account_id: Option<u64>,
}

/// Optional parameters echoed back during the token exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeOptions {
    pub state: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Optional parameters appended to the authorize URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizeOptions {
    pub state: Option<String>,
    pub redirect_uri: Option<String>,
    pub scope: Option<String>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
}

/// OAuth endpoints, reached through [`Client::oauth`].
#[derive(Clone, Copy, Debug)]
pub struct Oauth<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the OAuth helpers.
    #[must_use]
    pub const fn oauth(&self) -> Oauth<'_> {
        Oauth { client: self }
    }
}

impl Oauth<'_> {
    /// `POST /oauth/access_token` with `grant_type=authorization_code`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails, or
    /// [`HttpError::Deserialize`] if the server answers without a token.
    pub async fn exchange_authorization_for_token(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
        options: Option<&ExchangeOptions>,
    ) -> Result<OauthToken, HttpError> {
        let body = TokenRequest {
            code,
            client_id,
            client_secret,
            grant_type: "authorization_code",
            state: options.and_then(|o| o.state.as_deref()),
            redirect_uri: options.and_then(|o| o.redirect_uri.as_deref()),
        };

        let request = HttpRequest::builder(HttpMethod::Post, "oauth/access_token")
            .body(json_body(&body)?)
            .build()?;

        let response = self.client.execute_unwrapped::<OauthToken>(&request).await?;
        let status = response.status();
        response.into_data().ok_or_else(|| HttpError::Deserialize {
            status,
            message: "token response was empty".to_string(),
        })
    }

    /// Builds the URL the user is sent to in order to authorize the application.
    ///
    /// The URL is rooted at the configured site URL, not the API URL.
    #[must_use]
    pub fn authorize_url(&self, client_id: &str, options: Option<&AuthorizeOptions>) -> String {
        let mut url = format!(
            "{}/oauth/authorize?client_id={}&response_type=code",
            self.client.config().site_url(),
            urlencoding::encode(client_id)
        );

        if let Some(options) = options {
            let params = [
                ("state", options.state.as_deref()),
                ("redirect_uri", options.redirect_uri.as_deref()),
                ("scope", options.scope.as_deref()),
            ];
            for (key, value) in params {
                if let Some(value) = value {
                    url.push('&');
                    url.push_str(key);
                    url.push('=');
                    url.push_str(&urlencoding::encode(value));
                }
            }
        }

        url
    }
}

/// Random `state` value for CSRF protection during authorization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Generates a 15-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self { value }
    }

    /// Wraps a state value received on the redirect.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, DnsimpleConfig};
    use serde_json::json;

    fn client() -> Client {
        Client::new(DnsimpleConfig::default()).unwrap()
    }

    #[test]
    fn test_authorize_url_without_options() {
        assert_eq!(
            client().oauth().authorize_url("great-app", None),
            "https://dnsimple.com/oauth/authorize?client_id=great-app&response_type=code"
        );
    }

    #[test]
    fn test_authorize_url_encodes_options() {
        let options = AuthorizeOptions {
            state: Some("12345678".to_string()),
            redirect_uri: Some("http://example.com".to_string()),
            scope: None,
        };
        assert_eq!(
            client().oauth().authorize_url("great-app", Some(&options)),
            "https://dnsimple.com/oauth/authorize?client_id=great-app&response_type=code\
             &state=12345678&redirect_uri=http%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn test_authorize_url_uses_site_url() {
        let config = DnsimpleConfig::builder()
            .site_url(BaseUrl::sandbox_site())
            .build();
        let client = Client::new(config).unwrap();
        assert!(client
            .oauth()
            .authorize_url("great-app", None)
            .starts_with("https://sandbox.dnsimple.com/oauth/authorize?"));
    }

    #[test]
    fn test_token_request_omits_missing_options() {
        let body = TokenRequest {
            code: "abc",
            client_id: "great-app",
            client_secret: "secret",
            grant_type: "authorization_code",
            state: None,
            redirect_uri: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "code": "abc",
                "client_id": "great-app",
                "client_secret": "secret",
                "grant_type": "authorization_code"
            })
        );
    }

    #[test]
    fn test_oauth_token_with_null_scope() {
        let token: OauthToken = serde_json::from_value(json!({
            "access_token": "zKQ7OLqF5N1gylcJweA9WodA000BUNJD",
            "token_type": "Bearer",
            "scope": null,
            "account_id": 1
        }))
        .unwrap();
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));
        assert!(token.scope.is_none());
        assert_eq!(token.account_id, Some(1));
    }

    #[test]
    fn test_state_param_nonce() {
        let state = StateParam::new();
        assert_eq!(state.as_ref().len(), 15);
        assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(state, StateParam::new());
    }

    #[test]
    fn test_state_param_from_raw() {
        assert_eq!(StateParam::from_raw("abc").to_string(), "abc");
    }
}
