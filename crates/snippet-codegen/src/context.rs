//! Template contexts.
//!
//! One struct per template. Field names are the slots the templates
//! reference, so a custom template registered under a built-in name can use
//! exactly these variables.
//!
//! Caller values arrive already escaped for the single-quoted literals of
//! the template's target syntax.

use serde::Serialize;
use snippet_core::ClientConfig;
use std::borrow::Cow;

/// Client library identifiers, available as `{{client.*}}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClientContext<'a> {
    /// Import source, e.g. `@nangohq/node`
    pub package: &'a str,
    /// Exported class, e.g. `Nango`
    pub class_name: &'a str,
    /// Instance variable, e.g. `nango`
    pub binding: &'a str,
}

impl<'a> From<&'a ClientConfig> for ClientContext<'a> {
    fn from(config: &'a ClientConfig) -> Self {
        Self {
            package: &config.package,
            class_name: &config.class_name,
            binding: &config.binding,
        }
    }
}

/// Slots of the `list-records` template.
#[derive(Debug, Serialize)]
pub struct ListRecordsContext<'a> {
    /// Client identifiers
    pub client: ClientContext<'a>,
    /// Displayed credential (masked in production)
    pub credential: Cow<'a, str>,
    /// Provider config key
    pub provider_config_key: Cow<'a, str>,
    /// Connection id
    pub connection_id: Cow<'a, str>,
    /// Model name
    pub model: Cow<'a, str>,
}

/// Slots of the `trigger-action` template.
#[derive(Debug, Serialize)]
pub struct TriggerActionContext<'a> {
    /// Client identifiers
    pub client: ClientContext<'a>,
    /// Displayed credential (masked in production)
    pub credential: Cow<'a, str>,
    /// Provider config key
    pub provider_config_key: Cow<'a, str>,
    /// Connection id
    pub connection_id: Cow<'a, str>,
    /// Action name
    pub action_name: Cow<'a, str>,
    /// Annotated input, empty when absent
    pub input: String,
}

/// Slots of the `curl` template.
#[derive(Debug, Serialize)]
pub struct CurlContext<'a> {
    /// Resolved HTTP verb
    pub verb: &'static str,
    /// Base URL without trailing slash
    pub base_url: &'a str,
    /// API version prefix, e.g. `/v1`
    pub api_prefix: &'a str,
    /// Resolved endpoint path
    pub path: &'a str,
    /// Displayed credential (masked in production)
    pub credential: Cow<'a, str>,
    /// Connection id
    pub connection_id: Cow<'a, str>,
    /// Provider config key
    pub provider_config_key: Cow<'a, str>,
    /// Request body, empty when absent
    pub body: String,
}

/// Slots of the `start-sync` template.
#[derive(Debug, Serialize)]
pub struct StartSyncContext<'a> {
    /// Client identifiers
    pub client: ClientContext<'a>,
    /// Displayed credential (masked in production)
    pub credential: Cow<'a, str>,
    /// Provider config key
    pub provider: Cow<'a, str>,
    /// Sync name
    pub sync_name: Cow<'a, str>,
}

/// Slots of the `set-metadata` template.
#[derive(Debug, Serialize)]
pub struct SetMetadataContext<'a> {
    /// Client identifiers
    pub client: ClientContext<'a>,
    /// Credential, always shown as supplied
    pub credential: Cow<'a, str>,
    /// Provider config key
    pub provider: Cow<'a, str>,
    /// Formatted metadata, empty when absent
    pub metadata: String,
}
