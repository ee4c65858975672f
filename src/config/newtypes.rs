//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated DNSimple API access token.
///
/// Tokens are non-empty and masked in debug output so they do not end up
/// in logs by accident.
///
/// # Example
///
/// ```rust
/// use dnsimple::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated base URL (scheme + host, optional port), without trailing slash.
///
/// Used both for the API endpoint (`https://api.dnsimple.com`) and for the
/// site that hosts the OAuth authorize page (`https://dnsimple.com`).
///
/// # Example
///
/// ```rust
/// use dnsimple::BaseUrl;
///
/// let url = BaseUrl::new("https://api.dnsimple.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.dnsimple.com");
/// assert_eq!(url.host_name(), "api.dnsimple.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Production API endpoint.
    pub const PRODUCTION_API: &'static str = "https://api.dnsimple.com";
    /// Sandbox API endpoint.
    pub const SANDBOX_API: &'static str = "https://api.sandbox.dnsimple.com";
    /// Production site, hosting the OAuth authorize page.
    pub const PRODUCTION_SITE: &'static str = "https://dnsimple.com";
    /// Sandbox site, hosting the OAuth authorize page.
    pub const SANDBOX_SITE: &'static str = "https://sandbox.dnsimple.com";

    /// Creates a new validated base URL.
    ///
    /// Trailing slashes are removed. Only `http` and `https` schemes are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// The production API endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self::from_static(Self::PRODUCTION_API)
    }

    /// The sandbox API endpoint.
    #[must_use]
    pub fn sandbox() -> Self {
        Self::from_static(Self::SANDBOX_API)
    }

    /// The production site URL.
    #[must_use]
    pub fn production_site() -> Self {
        Self::from_static(Self::PRODUCTION_SITE)
    }

    /// The sandbox site URL.
    #[must_use]
    pub fn sandbox_site() -> Self {
        Self::from_static(Self::SANDBOX_SITE)
    }

    fn from_static(url: &'static str) -> Self {
        let host_start = url.find("://").map_or(0, |i| i + 3);
        Self {
            url: url.to_string(),
            host_start,
            host_end: url.len(),
        }
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
