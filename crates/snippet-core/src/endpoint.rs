//! Endpoint descriptors and their resolution into a concrete verb and path.
//!
//! Sync and action definitions describe their endpoints in three shapes: a
//! bare path, a single `{ VERB: path }` mapping, or a list of such mappings.
//! [`EndpointDescriptor::resolve`] collapses all three into one
//! [`ResolvedEndpoint`].
//!
//! # Examples
//!
//! ```
//! use snippet_core::{EndpointDescriptor, HttpVerb};
//!
//! let descriptor: EndpointDescriptor =
//!     serde_json::from_str(r#"[{"PUT": "/baz"}, {"GET": "/qux"}]"#).unwrap();
//! let resolved = descriptor.resolve(HttpVerb::Get).unwrap();
//!
//! assert_eq!(resolved.verb, HttpVerb::Put);
//! assert_eq!(resolved.path, "/baz");
//! ```

use crate::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs an endpoint can be declared with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpVerb {
    /// Every supported verb.
    pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete];

    /// Returns the upper-case wire name.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::HttpVerb;
    ///
    /// assert_eq!(HttpVerb::Patch.as_str(), "PATCH");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = Error;

    /// Parses a verb, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedEndpoint {
                reason: format!("unsupported HTTP verb '{s}'"),
            })
    }
}

/// Concrete verb and path an endpoint descriptor resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedEndpoint {
    /// HTTP verb
    pub verb: HttpVerb,
    /// Path relative to the API prefix, e.g. `/contacts`
    pub path: String,
}

impl ResolvedEndpoint {
    /// Creates a resolved endpoint.
    #[must_use]
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
        }
    }
}

/// A verb → path mapping, kept in the order the entries were supplied.
///
/// Keys are stored as raw strings and only parsed on resolution, so an
/// unknown verb surfaces as a [`Error::MalformedEndpoint`] from
/// [`EndpointMapping::resolve`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointMapping {
    entries: Vec<(String, String)>,
}

impl EndpointMapping {
    /// Creates a single-entry mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::{EndpointMapping, HttpVerb};
    ///
    /// let mapping = EndpointMapping::new(HttpVerb::Post, "/bar");
    /// assert_eq!(mapping.len(), 1);
    /// ```
    #[must_use]
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            entries: vec![(verb.as_str().to_string(), path.into())],
        }
    }

    /// Creates a mapping from raw `(verb, path)` entries in the given order.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(verb, path)| (verb.into(), path.into()))
                .collect(),
        }
    }

    /// Iterates over the raw entries in supplied order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(verb, path)| (verb.as_str(), path.as_str()))
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the mapping to its first entry.
    ///
    /// Callers are expected to supply single-key mappings. When more than
    /// one key is present the first one in supplied order wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEndpoint`] if the mapping is empty or its
    /// first key is not a supported HTTP verb.
    pub fn resolve(&self) -> Result<ResolvedEndpoint> {
        let (verb, path) = self.entries.first().ok_or_else(|| Error::MalformedEndpoint {
            reason: "endpoint mapping has no verb entries".to_string(),
        })?;

        if self.entries.len() > 1 {
            tracing::warn!(
                "Endpoint mapping has {} verb entries, using the first ('{}')",
                self.entries.len(),
                verb
            );
        }

        Ok(ResolvedEndpoint::new(verb.parse()?, path.clone()))
    }
}

impl<'de> Deserialize<'de> for EndpointMapping {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = EndpointMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of HTTP verb to path")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(1));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(EndpointMapping { entries })
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

/// Polymorphic endpoint description as found in sync and action metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EndpointDescriptor {
    /// Bare path; the verb comes from the caller's default.
    Path(String),
    /// Single verb → path mapping.
    Mapping(EndpointMapping),
    /// Ordered alternatives; only the first is used.
    Sequence(Vec<EndpointMapping>),
}

impl EndpointDescriptor {
    /// Resolves the descriptor into a concrete verb and path.
    ///
    /// `default_verb` only applies to bare paths. For mappings and sequences
    /// the declared verb always wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEndpoint`] for an empty sequence, an empty
    /// mapping, or an unsupported verb key.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_core::{EndpointDescriptor, EndpointMapping, HttpVerb};
    ///
    /// let bare = EndpointDescriptor::from("/foo");
    /// let resolved = bare.resolve(HttpVerb::Get).unwrap();
    /// assert_eq!((resolved.verb, resolved.path.as_str()), (HttpVerb::Get, "/foo"));
    ///
    /// let mapped = EndpointDescriptor::Mapping(EndpointMapping::new(HttpVerb::Post, "/bar"));
    /// let resolved = mapped.resolve(HttpVerb::Get).unwrap();
    /// assert_eq!((resolved.verb, resolved.path.as_str()), (HttpVerb::Post, "/bar"));
    /// ```
    pub fn resolve(&self, default_verb: HttpVerb) -> Result<ResolvedEndpoint> {
        match self {
            Self::Path(path) => Ok(ResolvedEndpoint::new(default_verb, path.clone())),
            Self::Mapping(mapping) => mapping.resolve(),
            Self::Sequence(mappings) => mappings
                .first()
                .ok_or_else(|| Error::MalformedEndpoint {
                    reason: "endpoint sequence is empty".to_string(),
                })?
                .resolve(),
        }
    }

    /// Returns `true` for the bare-path form.
    #[must_use]
    pub const fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

impl From<&str> for EndpointDescriptor {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for EndpointDescriptor {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<EndpointMapping> for EndpointDescriptor {
    fn from(mapping: EndpointMapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Vec<EndpointMapping>> for EndpointDescriptor {
    fn from(mappings: Vec<EndpointMapping>) -> Self {
        Self::Sequence(mappings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_path_uses_default_verb() {
        let resolved = EndpointDescriptor::from("/foo").resolve(HttpVerb::Get).unwrap();
        assert_eq!(resolved, ResolvedEndpoint::new(HttpVerb::Get, "/foo"));

        let resolved = EndpointDescriptor::from("/foo").resolve(HttpVerb::Delete).unwrap();
        assert_eq!(resolved.verb, HttpVerb::Delete);
    }

    #[test]
    fn test_mapping_verb_wins_over_default() {
        let descriptor = EndpointDescriptor::from(EndpointMapping::new(HttpVerb::Post, "/bar"));
        let resolved = descriptor.resolve(HttpVerb::Get).unwrap();
        assert_eq!(resolved, ResolvedEndpoint::new(HttpVerb::Post, "/bar"));
    }

    #[test]
    fn test_sequence_first_element_wins() {
        let descriptor = EndpointDescriptor::from(vec![
            EndpointMapping::new(HttpVerb::Put, "/baz"),
            EndpointMapping::new(HttpVerb::Get, "/qux"),
        ]);
        let resolved = descriptor.resolve(HttpVerb::Get).unwrap();
        assert_eq!(resolved, ResolvedEndpoint::new(HttpVerb::Put, "/baz"));
    }

    #[test]
    fn test_multi_key_mapping_takes_first_in_supplied_order() {
        let mapping = EndpointMapping::from_entries([("PATCH", "/z"), ("DELETE", "/a")]);
        let resolved = mapping.resolve().unwrap();
        assert_eq!(resolved, ResolvedEndpoint::new(HttpVerb::Patch, "/z"));
    }

    #[test]
    fn test_empty_sequence_is_malformed() {
        let err = EndpointDescriptor::Sequence(vec![])
            .resolve(HttpVerb::Get)
            .unwrap_err();
        assert!(err.is_malformed_endpoint());
        assert!(err.to_string().contains("sequence is empty"));
    }

    #[test]
    fn test_empty_mapping_is_malformed() {
        let err = EndpointDescriptor::Mapping(EndpointMapping::default())
            .resolve(HttpVerb::Get)
            .unwrap_err();
        assert!(err.is_malformed_endpoint());
    }

    #[test]
    fn test_unknown_verb_is_malformed() {
        let mapping = EndpointMapping::from_entries([("FETCH", "/x")]);
        let err = mapping.resolve().unwrap_err();
        assert!(err.is_malformed_endpoint());
        assert!(err.to_string().contains("FETCH"));
    }

    #[test]
    fn test_verb_parsing_ignores_case() {
        assert_eq!("post".parse::<HttpVerb>().unwrap(), HttpVerb::Post);
        assert_eq!("Delete".parse::<HttpVerb>().unwrap(), HttpVerb::Delete);
    }

    #[test]
    fn test_deserialize_all_shapes() {
        let bare: EndpointDescriptor = serde_json::from_str("\"/contacts\"").unwrap();
        assert!(bare.is_path());

        let single: EndpointDescriptor = serde_json::from_str(r#"{"POST": "/deals"}"#).unwrap();
        assert_eq!(
            single.resolve(HttpVerb::Get).unwrap(),
            ResolvedEndpoint::new(HttpVerb::Post, "/deals")
        );

        let list: EndpointDescriptor =
            serde_json::from_str(r#"[{"DELETE": "/a"}, {"GET": "/b"}]"#).unwrap();
        assert_eq!(
            list.resolve(HttpVerb::Get).unwrap(),
            ResolvedEndpoint::new(HttpVerb::Delete, "/a")
        );
    }

    #[test]
    fn test_deserialize_preserves_mapping_order() {
        let mapping: EndpointMapping =
            serde_json::from_str(r#"{"PUT": "/second", "GET": "/first"}"#).unwrap();
        let entries: Vec<_> = mapping.entries().collect();
        assert_eq!(entries, vec![("PUT", "/second"), ("GET", "/first")]);
    }
}
