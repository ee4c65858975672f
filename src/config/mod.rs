//! Configuration types for the DNSimple client.
//!
//! # Overview
//!
//! - [`DnsimpleConfig`]: The configuration struct holding all client settings
//! - [`DnsimpleConfigBuilder`]: A builder for constructing [`DnsimpleConfig`] instances
//! - [`AccessToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL for the API and the OAuth site
//!
//! # Example
//!
//! ```rust
//! use dnsimple::{AccessToken, BaseUrl, DnsimpleConfig};
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .base_url(BaseUrl::sandbox())
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.sandbox.dnsimple.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

/// Configuration for the DNSimple client.
///
/// # Defaults
///
/// - `base_url`: `https://api.dnsimple.com`
/// - `site_url`: `https://dnsimple.com`
/// - `access_token`: `None` (only the OAuth token exchange works without one)
/// - `user_agent_prefix`: `None`
#[derive(Clone, Debug)]
pub struct DnsimpleConfig {
    access_token: Option<AccessToken>,
    base_url: BaseUrl,
    site_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl DnsimpleConfig {
    /// Creates a new builder for constructing a `DnsimpleConfig`.
    #[must_use]
    pub fn builder() -> DnsimpleConfigBuilder {
        DnsimpleConfigBuilder::new()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the site URL used for OAuth authorization.
    #[must_use]
    pub const fn site_url(&self) -> &BaseUrl {
        &self.site_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for DnsimpleConfig {
    fn default() -> Self {
        DnsimpleConfigBuilder::new().build()
    }
}

// Verify DnsimpleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DnsimpleConfig>();
};

/// Builder for constructing [`DnsimpleConfig`] instances.
///
/// Every field is optional; values are validated by their newtypes before
/// they reach the builder, so `build` cannot fail.
///
/// # Example
///
/// ```rust
/// use dnsimple::{AccessToken, BaseUrl, DnsimpleConfig};
///
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DnsimpleConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    site_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl DnsimpleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token sent as a bearer token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the site URL used to build OAuth authorize URLs.
    #[must_use]
    pub fn site_url(mut self, url: BaseUrl) -> Self {
        self.site_url = Some(url);
        self
    }

    /// Points both the API and the site at the DNSimple sandbox.
    #[must_use]
    pub fn sandbox(self) -> Self {
        self.base_url(BaseUrl::sandbox())
            .site_url(BaseUrl::sandbox_site())
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DnsimpleConfig`].
    #[must_use]
    pub fn build(self) -> DnsimpleConfig {
        DnsimpleConfig {
            access_token: self.access_token,
            base_url: self.base_url.unwrap_or_else(BaseUrl::production),
            site_url: self.site_url.unwrap_or_else(BaseUrl::production_site),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
