//! Per-format snippet requests.
//!
//! Requests deserialize from the JSON the documentation UI already holds, so
//! a UI payload can be handed to [`SnippetGenerator::render`] as-is.
//!
//! [`SnippetGenerator::render`]: crate::SnippetGenerator::render
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::{SnippetFormat, SnippetRequest};
//!
//! let request: SnippetRequest = serde_json::from_str(r#"{
//!     "format": "curl",
//!     "credential": "sk-test",
//!     "connection_id": "conn-1",
//!     "provider_config_key": "github",
//!     "base_url": "https://api.example.com",
//!     "endpoint": {"POST": "/issues"}
//! }"#).unwrap();
//!
//! assert_eq!(request.format(), SnippetFormat::Curl);
//! ```

use crate::types::SnippetFormat;
use serde::Deserialize;
use snippet_core::{
    ConnectionId, Credential, EndpointDescriptor, HttpVerb, ModelSelector, ProviderConfigKey,
    RenderContext, SamplePayload,
};

/// Request for a records-listing snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsRequest {
    /// Deployment mode at call time
    #[serde(default)]
    pub context: RenderContext,
    /// Secret key
    pub credential: Credential,
    /// Connection to list records for
    pub connection_id: ConnectionId,
    /// Provider config key
    pub provider_config_key: ProviderConfigKey,
    /// Model name or the sync's model list
    #[serde(default)]
    pub models: Option<ModelSelector>,
}

/// Request for an action-invocation snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerActionRequest {
    /// Deployment mode at call time
    #[serde(default)]
    pub context: RenderContext,
    /// Secret key
    pub credential: Credential,
    /// Connection to run the action on
    pub connection_id: ConnectionId,
    /// Provider config key
    pub provider_config_key: ProviderConfigKey,
    /// Action name
    pub action_name: String,
    /// Sample input
    #[serde(default)]
    pub input: Option<SamplePayload>,
    /// Input is already an illustrative example; skip placeholder wrapping
    #[serde(default)]
    pub safe_input: bool,
}

/// Request for a raw HTTP (curl) example.
#[derive(Debug, Clone, Deserialize)]
pub struct CurlRequest {
    /// Deployment mode at call time
    #[serde(default)]
    pub context: RenderContext,
    /// Secret key
    pub credential: Credential,
    /// Connection id header value
    pub connection_id: ConnectionId,
    /// Provider config key header value
    pub provider_config_key: ProviderConfigKey,
    /// API base URL, e.g. `https://api.nango.dev`
    pub base_url: String,
    /// Endpoint of the sync or action
    pub endpoint: EndpointDescriptor,
    /// Sample request body
    #[serde(default)]
    pub input: Option<SamplePayload>,
    /// Verb for bare-path endpoints; ignored when the endpoint declares one
    #[serde(default)]
    pub method: Option<HttpVerb>,
}

/// Request for a sync-start snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSyncRequest {
    /// Deployment mode at call time
    #[serde(default)]
    pub context: RenderContext,
    /// Secret key
    pub credential: Credential,
    /// Provider config key
    pub provider: ProviderConfigKey,
    /// Sync to start
    pub sync_name: String,
}

/// Request for a metadata-set snippet.
///
/// Carries no [`RenderContext`]: this snippet always shows the credential as
/// supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct SetMetadataRequest {
    /// Secret key
    pub credential: Credential,
    /// Provider config key
    pub provider: ProviderConfigKey,
    /// Example metadata, shown without placeholder wrapping
    #[serde(default)]
    pub metadata: Option<SamplePayload>,
}

/// Any snippet request, tagged by `format`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
pub enum SnippetRequest {
    /// See [`ListRecordsRequest`]
    ListRecords(ListRecordsRequest),
    /// See [`TriggerActionRequest`]
    TriggerAction(TriggerActionRequest),
    /// See [`CurlRequest`]
    Curl(CurlRequest),
    /// See [`StartSyncRequest`]
    StartSync(StartSyncRequest),
    /// See [`SetMetadataRequest`]
    SetMetadata(SetMetadataRequest),
}

impl SnippetRequest {
    /// Format this request renders to.
    #[must_use]
    pub const fn format(&self) -> SnippetFormat {
        match self {
            Self::ListRecords(_) => SnippetFormat::ListRecords,
            Self::TriggerAction(_) => SnippetFormat::TriggerAction,
            Self::Curl(_) => SnippetFormat::Curl,
            Self::StartSync(_) => SnippetFormat::StartSync,
            Self::SetMetadata(_) => SnippetFormat::SetMetadata,
        }
    }
}

impl From<ListRecordsRequest> for SnippetRequest {
    fn from(request: ListRecordsRequest) -> Self {
        Self::ListRecords(request)
    }
}

impl From<TriggerActionRequest> for SnippetRequest {
    fn from(request: TriggerActionRequest) -> Self {
        Self::TriggerAction(request)
    }
}

impl From<CurlRequest> for SnippetRequest {
    fn from(request: CurlRequest) -> Self {
        Self::Curl(request)
    }
}

impl From<StartSyncRequest> for SnippetRequest {
    fn from(request: StartSyncRequest) -> Self {
        Self::StartSync(request)
    }
}

impl From<SetMetadataRequest> for SnippetRequest {
    fn from(request: SetMetadataRequest) -> Self {
        Self::SetMetadata(request)
    }
}
