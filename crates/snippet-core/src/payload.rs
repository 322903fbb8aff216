//! Caller-supplied sample data: payloads and model selectors.
//!
//! Both are display-only. Nothing here is parsed back or validated against a
//! schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sample input shown in a rendered snippet.
///
/// # Examples
///
/// ```
/// use snippet_core::SamplePayload;
/// use serde_json::json;
///
/// let text: SamplePayload = serde_json::from_value(json!("ticket-id")).unwrap();
/// assert_eq!(text, SamplePayload::Text("ticket-id".to_string()));
///
/// let structured: SamplePayload = serde_json::from_value(json!({"title": "Bug"})).unwrap();
/// assert!(matches!(structured, SamplePayload::Structured(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SamplePayload {
    /// A single string value.
    Text(String),
    /// Any structured value: mapping, sequence, or nested scalars.
    Structured(Value),
}

impl SamplePayload {
    /// Returns `true` for an empty text payload.
    ///
    /// Structured payloads are never considered empty, even `{}`.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for SamplePayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SamplePayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for SamplePayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }
}

/// A model declared by a sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncModel {
    /// Model name, e.g. `Contact`
    pub name: String,
}

impl SyncModel {
    /// Creates a model entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Which model a records listing targets.
///
/// # Examples
///
/// ```
/// use snippet_core::{ModelSelector, SyncModel};
///
/// let models = ModelSelector::Models(vec![SyncModel::new("Contact"), SyncModel::new("Deal")]);
/// assert_eq!(models.primary_name(), Some("Contact"));
///
/// assert_eq!(ModelSelector::from("Ticket").primary_name(), Some("Ticket"));
/// assert_eq!(ModelSelector::Models(vec![]).primary_name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelSelector {
    /// Model named directly.
    Name(String),
    /// The sync's model list; only the first entry is used.
    Models(Vec<SyncModel>),
}

impl ModelSelector {
    /// Returns the model name a snippet should show.
    #[must_use]
    pub fn primary_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Models(models) => models.first().map(|model| model.name.as_str()),
        }
    }
}

impl From<&str> for ModelSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<Vec<SyncModel>> for ModelSelector {
    fn from(models: Vec<SyncModel>) -> Self {
        Self::Models(models)
    }
}
