//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated Mirakl shop API key.
///
/// The key is sent verbatim as the `Authorization` header on every request.
/// Mirakl defines its own scheme, so the SDK never prefixes, encodes or
/// rotates it.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use mirakl_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated marketplace hostname.
///
/// Each Mirakl operator runs its own instance, so the hostname is whatever
/// the operator published (e.g. `marketplace.mirakl.net`). Only the bare
/// host is accepted: no scheme, path, or whitespace. Input is trimmed and
/// lowercased.
///
/// # Serialization
///
/// `Hostname` serializes to and deserializes from its string form:
///
/// ```rust
/// use mirakl_api::Hostname;
///
/// let host = Hostname::new("Example.Mirakl.net").unwrap();
/// let json = serde_json::to_string(&host).unwrap();
/// assert_eq!(json, r#""example.mirakl.net""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Hostname(String);

impl Hostname {
    /// Creates a new validated hostname.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostname`] if the hostname is empty or
    /// contains a scheme, path, or whitespace.
    pub fn new(hostname: impl Into<String>) -> Result<Self, ConfigError> {
        let hostname = hostname.into().trim().to_lowercase();

        if !Self::is_valid(&hostname) {
            return Err(ConfigError::InvalidHostname { hostname });
        }

        Ok(Self(hostname))
    }

    fn is_valid(hostname: &str) -> bool {
        if hostname.is_empty() || hostname.starts_with('.') || hostname.ends_with('.') {
            return false;
        }

        // Port suffixes are allowed, anything that looks like a URL is not
        hostname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':'))
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Hostname {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A validated host URL overriding the default `https://{hostname}` origin.
///
/// Used to route requests through a proxy or at a local mock server. Only
/// `http` and `https` origins are accepted, optionally with a port or a path
/// prefix. Any trailing `/` is dropped so the URL can be joined with path
/// segments.
///
/// # Example
///
/// ```rust
/// use mirakl_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// assert!(HostUrl::new("localhost:3000").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is not `http` or
    /// `https`, has no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        let valid = rest.is_some_and(|rest| {
            !rest.is_empty() && !rest.starts_with(['/', ':']) && !rest.contains(['?', '#'])
        });

        if valid {
            Ok(Self(url))
        } else {
            Err(ConfigError::InvalidHostUrl { url })
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
