//! Error types for snippet generation.
//!
//! Rendering is all-or-nothing: any of these errors means no snippet text was
//! produced.
//!
//! # Examples
//!
//! ```
//! use snippet_core::{Error, Result};
//!
//! fn require_path(path: &str) -> Result<&str> {
//!     if path.is_empty() {
//!         return Err(Error::MalformedEndpoint {
//!             reason: "endpoint path cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(path)
//! }
//!
//! let err = require_path("").unwrap_err();
//! assert!(err.is_malformed_endpoint());
//! ```

use thiserror::Error;

/// Main error type for snippet generation.
///
/// All errors in the workspace use this type, providing consistent error
/// handling across both crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint descriptor could not be resolved.
    ///
    /// Raised for empty mappings, empty sequences, and verb keys outside the
    /// supported set. A malformed descriptor points at an upstream data error,
    /// so resolution fails instead of guessing.
    #[error("Malformed endpoint descriptor: {reason}")]
    MalformedEndpoint {
        /// Description of what is wrong with the descriptor
        reason: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when a sample payload cannot be pretty-printed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Template registration or rendering failed.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, unreadable, or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a malformed endpoint error.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::Error;
    ///
    /// let err = Error::MalformedEndpoint {
    ///     reason: "empty sequence".to_string(),
    /// };
    /// assert!(err.is_malformed_endpoint());
    /// ```
    #[must_use]
    pub const fn is_malformed_endpoint(&self) -> bool {
        matches!(self, Self::MalformedEndpoint { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     template: "curl".to_string(),
    ///     message: "missing field".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for snippet operations.
///
/// # Examples
///
/// ```
/// use snippet_core::{Error, Result};
///
/// fn indent(width: usize) -> Result<usize> {
///     if width > 16 {
///         return Err(Error::ConfigError {
///             message: "indent too wide".to_string(),
///         });
///     }
///     Ok(width)
/// }
///
/// assert!(indent(4).is_ok());
/// assert!(indent(40).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
