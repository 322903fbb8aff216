//! Strong domain types for snippet requests.
//!
//! Connection ids and provider config keys are both plain strings on the
//! wire and sit next to each other in every request, so each gets its own
//! newtype.
//!
//! # Examples
//!
//! ```
//! use snippet_core::{ConnectionId, ProviderConfigKey};
//!
//! let connection = ConnectionId::new("conn-42");
//! let provider = ProviderConfigKey::new("github");
//! assert_eq!(connection.as_str(), "conn-42");
//! assert_eq!(provider.as_str(), "github");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection identifier (newtype over String).
///
/// Identifies one end-user connection on the integration platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates a new connection identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::ConnectionId;
    ///
    /// let id = ConnectionId::new("conn-1");
    /// let from_string = ConnectionId::new(String::from("conn-1"));
    /// assert_eq!(id, from_string);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the connection ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ConnectionId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ConnectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConnectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Provider config key (newtype over String).
///
/// Names the integration configuration (for example `github` or
/// `salesforce-sandbox`) a call is routed through. Start-sync and
/// set-metadata snippets call it "provider".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfigKey(String);

impl ProviderConfigKey {
    /// Creates a new provider config key.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::ProviderConfigKey;
    ///
    /// let key = ProviderConfigKey::new("hubspot");
    /// assert_eq!(key.as_str(), "hubspot");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProviderConfigKey` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProviderConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProviderConfigKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProviderConfigKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
