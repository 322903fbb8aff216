//! Configuration for snippet rendering.
//!
//! Every field has a default matching the output the documentation UI
//! expects, so an empty TOML document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use snippet_core::{HttpVerb, SnippetConfig};
//!
//! let config = SnippetConfig::default();
//! assert_eq!(config.masked_secret, "<secret-key-from-environment-settings>");
//! assert_eq!(config.indent_width, 4);
//! assert_eq!(config.default_verb, HttpVerb::Get);
//!
//! let custom = SnippetConfig::from_toml_str(
//!     r#"
//!     api_prefix = "/v2"
//!
//!     [client]
//!     package = "@acme/sdk"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(custom.api_prefix, "/v2");
//! assert_eq!(custom.client.package, "@acme/sdk");
//! assert_eq!(custom.client.class_name, "Nango");
//! ```

use crate::{Error, HttpVerb, Result};
use serde::Deserialize;
use std::path::Path;

/// Placeholder shown instead of the credential in production deployments.
pub const DEFAULT_MASKED_SECRET: &str = "<secret-key-from-environment-settings>";

const MAX_INDENT_WIDTH: usize = 16;

/// Rendering configuration shared by all snippet formats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    /// Text substituted for the credential when rendering for production.
    ///
    /// Default: `<secret-key-from-environment-settings>`
    pub masked_secret: String,

    /// Indent applied to continuation lines of payload blocks so they line
    /// up with the call arguments around them.
    ///
    /// Default: 4
    pub indent_width: usize,

    /// Path prefix inserted between the base URL and the endpoint path in
    /// raw HTTP examples.
    ///
    /// Default: `/v1`
    pub api_prefix: String,

    /// Verb used for bare-path endpoints when the caller gives none.
    ///
    /// Default: `GET`
    pub default_verb: HttpVerb,

    /// Client library identifiers used in TypeScript snippets.
    pub client: ClientConfig,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            masked_secret: DEFAULT_MASKED_SECRET.to_string(),
            indent_width: 4,
            api_prefix: "/v1".to_string(),
            default_verb: HttpVerb::Get,
            client: ClientConfig::default(),
        }
    }
}

impl SnippetConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::SnippetConfig;
    ///
    /// let config = SnippetConfig::builder()
    ///     .masked_secret("<YOUR-SECRET-KEY>")
    ///     .indent_width(2)
    ///     .build();
    ///
    /// assert_eq!(config.masked_secret, "<YOUR-SECRET-KEY>");
    /// assert_eq!(config.indent_width, 2);
    /// ```
    #[must_use]
    pub fn builder() -> SnippetConfigBuilder {
        SnippetConfigBuilder::new()
    }

    /// Parses a configuration from TOML and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the TOML is malformed, contains
    /// unknown keys, or fails [`SnippetConfig::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::ConfigError {
            message: format!("Failed to parse snippet configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or its
    /// contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        tracing::debug!("Loaded snippet configuration from {}", path.display());

        Self::from_toml_str(&source)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - The masked secret is empty
    /// - The indent width exceeds 16
    /// - The API prefix is non-empty and does not start with `/`
    /// - Any client identifier is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::SnippetConfig;
    ///
    /// assert!(SnippetConfig::default().validate().is_ok());
    ///
    /// let mut invalid = SnippetConfig::default();
    /// invalid.api_prefix = "v1".to_string();
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.masked_secret.is_empty() {
            return Err(config_error("masked_secret cannot be empty"));
        }

        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(config_error(format!(
                "indent_width must be at most {MAX_INDENT_WIDTH}, got {}",
                self.indent_width
            )));
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(config_error(format!(
                "api_prefix must start with '/', got '{}'",
                self.api_prefix
            )));
        }

        self.client.validate()
    }
}

/// Identifiers of the client library used in TypeScript snippets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Package the client is imported from. Default: `@nangohq/node`
    pub package: String,
    /// Exported class name. Default: `Nango`
    pub class_name: String,
    /// Variable the client instance is bound to. Default: `nango`
    pub binding: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            package: "@nangohq/node".to_string(),
            class_name: "Nango".to_string(),
            binding: "nango".to_string(),
        }
    }
}

impl ClientConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("client.package", &self.package),
            ("client.class_name", &self.class_name),
            ("client.binding", &self.binding),
        ] {
            if value.trim().is_empty() {
                return Err(config_error(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::ConfigError {
        message: message.into(),
    }
}

/// Builder for `SnippetConfig`.
#[derive(Debug)]
pub struct SnippetConfigBuilder {
    config: SnippetConfig,
}

impl SnippetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SnippetConfig::default(),
        }
    }

    /// Sets the production placeholder for credentials.
    #[must_use]
    pub fn masked_secret(mut self, masked: impl Into<String>) -> Self {
        self.config.masked_secret = masked.into();
        self
    }

    /// Sets the payload continuation indent.
    #[must_use]
    pub const fn indent_width(mut self, width: usize) -> Self {
        self.config.indent_width = width;
        self
    }

    /// Sets the raw HTTP path prefix.
    #[must_use]
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.api_prefix = prefix.into();
        self
    }

    /// Sets the verb used for bare-path endpoints.
    #[must_use]
    pub const fn default_verb(mut self, verb: HttpVerb) -> Self {
        self.config.default_verb = verb;
        self
    }

    /// Sets the client library identifiers.
    #[must_use]
    pub fn client(mut self, client: ClientConfig) -> Self {
        self.config.client = client;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> SnippetConfig {
        self.config
    }
}

impl Default for SnippetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
