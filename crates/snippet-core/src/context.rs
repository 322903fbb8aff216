//! Per-call render context and the credential it governs.
//!
//! The deployment mode is never read from global state: every render call
//! receives a fresh [`RenderContext`], so masking always reflects the mode
//! the caller observed at call time.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Deployment information supplied with every render call.
///
/// # Examples
///
/// ```
/// use snippet_core::RenderContext;
///
/// assert!(RenderContext::production().is_production());
/// assert!(!RenderContext::development().is_production());
/// assert_eq!(RenderContext::default(), RenderContext::development());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct RenderContext {
    /// Whether the caller is running in a production deployment.
    #[serde(default)]
    pub is_production: bool,
}

impl RenderContext {
    /// Creates a context for the given deployment mode.
    #[inline]
    #[must_use]
    pub const fn new(is_production: bool) -> Self {
        Self { is_production }
    }

    /// Context for a production deployment: credentials are masked.
    #[inline]
    #[must_use]
    pub const fn production() -> Self {
        Self::new(true)
    }

    /// Context for local or development deployments.
    #[inline]
    #[must_use]
    pub const fn development() -> Self {
        Self::new(false)
    }

    /// Returns `true` when rendering for a production deployment.
    #[inline]
    #[must_use]
    pub const fn is_production(&self) -> bool {
        self.is_production
    }
}

/// Secret key used to authenticate against the integration platform.
///
/// Wraps [`SecretString`] so the raw value never shows up in `Debug` output
/// or logs. It can only be read through [`Credential::expose`].
///
/// # Examples
///
/// ```
/// use snippet_core::Credential;
///
/// let key = Credential::new("sk-live-123");
/// assert_eq!(key.expose(), "sk-live-123");
/// assert!(!format!("{key:?}").contains("sk-live-123"));
/// ```
#[derive(Debug, Deserialize)]
#[serde(from = "String")]
pub struct Credential(SecretString);

impl Credential {
    /// Creates a credential from the raw secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::from(secret.into()))
    }

    /// Returns the raw secret.
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_constructors() {
        assert!(RenderContext::new(true).is_production());
        assert!(!RenderContext::new(false).is_production());
    }

    #[test]
    fn test_context_deserializes_with_default() {
        let ctx: RenderContext = serde_json::from_str("{}").unwrap();
        assert!(!ctx.is_production());

        let ctx: RenderContext = serde_json::from_str(r#"{"is_production": true}"#).unwrap();
        assert!(ctx.is_production());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let key = Credential::new("super-secret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_credential_clone_keeps_value() {
        let key = Credential::from("abc");
        let copy = key.clone();
        assert_eq!(copy.expose(), "abc");
    }

    #[test]
    fn test_credential_deserializes_from_string() {
        let key: Credential = serde_json::from_str("\"sk-test\"").unwrap();
        assert_eq!(key.expose(), "sk-test");
    }
}
