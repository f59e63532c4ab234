//! Configuration types for the Mirakl API SDK.
//!
//! This module provides the configuration used to build a
//! [`MiraklClient`](crate::MiraklClient).
//!
//! # Overview
//!
//! - [`MiraklConfig`]: The configuration struct holding all SDK settings
//! - [`MiraklConfigBuilder`]: A builder for constructing [`MiraklConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Hostname`]: A validated marketplace hostname
//! - [`HostUrl`]: A validated origin override for proxies and tests
//!
//! # Example
//!
//! ```rust
//! use mirakl_api::{MiraklConfig, ApiKey, Hostname};
//!
//! let config = MiraklConfig::builder()
//!     .hostname(Hostname::new("example.mirakl.net").unwrap())
//!     .api_key(ApiKey::new("token123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.origin(), "https://example.mirakl.net");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, HostUrl, Hostname};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Mirakl API SDK.
///
/// # Thread Safety
///
/// `MiraklConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MiraklConfig {
    hostname: Hostname,
    api_key: ApiKey,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl MiraklConfig {
    /// Creates a new builder for constructing a `MiraklConfig`.
    #[must_use]
    pub fn builder() -> MiraklConfigBuilder {
        MiraklConfigBuilder::new()
    }

    /// Returns the marketplace hostname.
    #[must_use]
    pub const fn hostname(&self) -> &Hostname {
        &self.hostname
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the host URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport-level request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the origin requests are sent to.
    ///
    /// This is the host URL override when one is set, otherwise
    /// `https://{hostname}`.
    #[must_use]
    pub fn origin(&self) -> String {
        self.host.as_ref().map_or_else(
            || format!("https://{}", self.hostname),
            |host| host.as_ref().to_string(),
        )
    }
}

// Verify MiraklConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MiraklConfig>();
};

/// Builder for constructing [`MiraklConfig`] instances.
///
/// Required fields are `hostname` and `api_key`.
///
/// # Defaults
///
/// - `host`: `None` (requests go to `https://{hostname}`)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no transport-level timeout)
#[derive(Debug, Default)]
pub struct MiraklConfigBuilder {
    hostname: Option<Hostname>,
    api_key: Option<ApiKey>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl MiraklConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marketplace hostname (required).
    #[must_use]
    pub fn hostname(mut self, hostname: Hostname) -> Self {
        self.hostname = Some(hostname);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the origin requests are sent to.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied by the transport to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`MiraklConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `hostname` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<MiraklConfig, ConfigError> {
        let hostname = self
            .hostname
            .ok_or(ConfigError::MissingRequiredField { field: "hostname" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(MiraklConfig {
            hostname,
            api_key,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
