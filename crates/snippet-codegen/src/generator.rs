//! Snippet generator.
//!
//! Each renderer masks the credential, formats the payload if the format has
//! one, resolves the endpoint for curl, and fills its template. Renderers
//! are independent of each other and keep no state between calls.
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::{SnippetGenerator, StartSyncRequest};
//! use snippet_core::{Credential, RenderContext};
//!
//! let generator = SnippetGenerator::new().unwrap();
//! let snippet = generator
//!     .start_sync(&StartSyncRequest {
//!         context: RenderContext::production(),
//!         credential: Credential::new("sk-live-123"),
//!         provider: "github".into(),
//!         sync_name: "issues".to_string(),
//!     })
//!     .unwrap();
//!
//! assert!(snippet.contains("await nango.startSync('github', ['issues'], '<CONNECTION-ID>');"));
//! assert!(!snippet.contains("sk-live-123"));
//! ```

use crate::context::{
    ClientContext, CurlContext, ListRecordsContext, SetMetadataContext, StartSyncContext,
    TriggerActionContext,
};
use crate::escape::{shell_single_quoted, typescript_single_quoted};
use crate::payload::PayloadAnnotator;
use crate::request::{
    CurlRequest, ListRecordsRequest, SetMetadataRequest, SnippetRequest, StartSyncRequest,
    TriggerActionRequest,
};
use crate::secret::present_with_mask;
use crate::template_engine::TemplateEngine;
use crate::types::{RenderedSnippet, SnippetFormat};
use serde::Serialize;
use snippet_core::{Credential, ModelSelector, RenderContext, Result, SnippetConfig};

/// Shown when a records listing has no model to name.
pub const MODEL_PLACEHOLDER: &str = "<MODEL-NAME>";

/// Renders snippets in all five formats.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one generator can serve concurrent
/// callers.
#[derive(Debug)]
pub struct SnippetGenerator<'a> {
    engine: TemplateEngine<'a>,
    config: SnippetConfig,
    annotator: PayloadAnnotator,
}

impl<'a> SnippetGenerator<'a> {
    /// Creates a generator with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        Self::with_config(SnippetConfig::default())
    }

    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template
    /// registration fails.
    pub fn with_config(config: SnippetConfig) -> Result<Self> {
        Self::with_engine(config, TemplateEngine::new()?)
    }

    /// Creates a generator around a prepared engine, e.g. one with
    /// overridden templates.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn with_engine(config: SnippetConfig, engine: TemplateEngine<'a>) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            "Snippet generator ready (client: {}, api prefix: '{}')",
            config.client.package,
            config.api_prefix
        );

        Ok(Self {
            engine,
            annotator: PayloadAnnotator::new(config.indent_width),
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SnippetConfig {
        &self.config
    }

    /// Renders any request, tagging the text with its format and language.
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected renderer.
    pub fn render(&self, request: &SnippetRequest) -> Result<RenderedSnippet> {
        let content = match request {
            SnippetRequest::ListRecords(r) => self.list_records(r)?,
            SnippetRequest::TriggerAction(r) => self.trigger_action(r)?,
            SnippetRequest::Curl(r) => self.curl(r)?,
            SnippetRequest::StartSync(r) => self.start_sync(r)?,
            SnippetRequest::SetMetadata(r) => self.set_metadata(r)?,
        };
        Ok(RenderedSnippet::new(request.format(), content))
    }

    /// Renders a records-listing snippet.
    ///
    /// With a model list only the first model is shown. Here and in every
    /// other renderer, caller values placed inside `'...'` literals are
    /// escaped for the snippet's target syntax.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn list_records(&self, request: &ListRecordsRequest) -> Result<String> {
        let model = request
            .models
            .as_ref()
            .and_then(ModelSelector::primary_name)
            .unwrap_or(MODEL_PLACEHOLDER);

        let context = ListRecordsContext {
            client: self.client(),
            credential: typescript_single_quoted(
                self.display_credential(&request.context, &request.credential),
            ),
            provider_config_key: typescript_single_quoted(request.provider_config_key.as_str()),
            connection_id: typescript_single_quoted(request.connection_id.as_str()),
            model: typescript_single_quoted(model),
        };
        self.render_template(SnippetFormat::ListRecords, &context)
    }

    /// Renders an action-invocation snippet.
    ///
    /// The input line is left out entirely when there is no input.
    ///
    /// # Errors
    ///
    /// Returns error if the input cannot be serialized or template
    /// rendering fails.
    pub fn trigger_action(&self, request: &TriggerActionRequest) -> Result<String> {
        let input = self
            .annotator
            .annotate(request.input.as_ref(), request.safe_input)?;

        let context = TriggerActionContext {
            client: self.client(),
            credential: typescript_single_quoted(
                self.display_credential(&request.context, &request.credential),
            ),
            provider_config_key: typescript_single_quoted(request.provider_config_key.as_str()),
            connection_id: typescript_single_quoted(request.connection_id.as_str()),
            action_name: typescript_single_quoted(&request.action_name),
            input,
        };
        self.render_template(SnippetFormat::TriggerAction, &context)
    }

    /// Renders a raw HTTP example as a curl command.
    ///
    /// Bare-path endpoints use the request's `method`, falling back to the
    /// configured default verb. Mapped endpoints always use their own verb.
    /// The `--data` line only appears when there is a body.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint descriptor is malformed, the input
    /// cannot be serialized, or template rendering fails.
    pub fn curl(&self, request: &CurlRequest) -> Result<String> {
        let default_verb = request.method.unwrap_or(self.config.default_verb);
        let endpoint = request.endpoint.resolve(default_verb)?;
        let body = self.annotator.request_body(request.input.as_ref())?;

        let context = CurlContext {
            verb: endpoint.verb.as_str(),
            base_url: request.base_url.trim_end_matches('/'),
            api_prefix: &self.config.api_prefix,
            path: &endpoint.path,
            credential: shell_single_quoted(
                self.display_credential(&request.context, &request.credential),
            ),
            connection_id: shell_single_quoted(request.connection_id.as_str()),
            provider_config_key: shell_single_quoted(request.provider_config_key.as_str()),
            body,
        };
        self.render_template(SnippetFormat::Curl, &context)
    }

    /// Renders a sync-start snippet.
    ///
    /// The connection argument is always the `<CONNECTION-ID>` placeholder.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn start_sync(&self, request: &StartSyncRequest) -> Result<String> {
        let context = StartSyncContext {
            client: self.client(),
            credential: typescript_single_quoted(
                self.display_credential(&request.context, &request.credential),
            ),
            provider: typescript_single_quoted(request.provider.as_str()),
            sync_name: typescript_single_quoted(&request.sync_name),
        };
        self.render_template(SnippetFormat::StartSync, &context)
    }

    /// Renders a metadata-set snippet.
    ///
    /// Unlike every other format the credential is shown unmasked. Metadata
    /// is printed as supplied, without placeholder wrapping.
    ///
    /// # Errors
    ///
    /// Returns error if the metadata cannot be serialized or template
    /// rendering fails.
    pub fn set_metadata(&self, request: &SetMetadataRequest) -> Result<String> {
        // TODO: confirm with product whether production deployments should mask here too.
        let metadata = self.annotator.annotate(request.metadata.as_ref(), true)?;

        let context = SetMetadataContext {
            client: self.client(),
            credential: typescript_single_quoted(request.credential.expose()),
            provider: typescript_single_quoted(request.provider.as_str()),
            metadata,
        };
        self.render_template(SnippetFormat::SetMetadata, &context)
    }

    fn client(&self) -> ClientContext<'_> {
        ClientContext::from(&self.config.client)
    }

    fn display_credential<'r>(
        &'r self,
        context: &RenderContext,
        credential: &'r Credential,
    ) -> &'r str {
        present_with_mask(context, credential, &self.config.masked_secret)
    }

    fn render_template<T: Serialize>(&self, format: SnippetFormat, context: &T) -> Result<String> {
        let content = self.engine.render(format.template_name(), context)?;
        tracing::debug!("Rendered {} snippet ({} bytes)", format, content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippet_core::{EndpointDescriptor, EndpointMapping, HttpVerb, SamplePayload, SyncModel};

    fn generator() -> SnippetGenerator<'static> {
        SnippetGenerator::new().unwrap()
    }

    fn curl_request(endpoint: EndpointDescriptor) -> CurlRequest {
        CurlRequest {
            context: RenderContext::development(),
            credential: Credential::new("sk-dev"),
            connection_id: "conn-1".into(),
            provider_config_key: "github".into(),
            base_url: "https://api.nango.dev".to_string(),
            endpoint,
            input: None,
            method: None,
        }
    }

    #[test]
    fn test_list_records_without_models_uses_placeholder() {
        let snippet = generator()
            .list_records(&ListRecordsRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk"),
                connection_id: "c".into(),
                provider_config_key: "p".into(),
                models: None,
            })
            .unwrap();
        assert!(snippet.contains("model: '<MODEL-NAME>'"));
    }

    #[test]
    fn test_list_records_with_empty_model_list_uses_placeholder() {
        let snippet = generator()
            .list_records(&ListRecordsRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk"),
                connection_id: "c".into(),
                provider_config_key: "p".into(),
                models: Some(ModelSelector::Models(vec![])),
            })
            .unwrap();
        assert!(snippet.contains("model: '<MODEL-NAME>'"));
    }

    #[test]
    fn test_list_records_named_model() {
        let snippet = generator()
            .list_records(&ListRecordsRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk"),
                connection_id: "c".into(),
                provider_config_key: "p".into(),
                models: Some(vec![SyncModel::new("Ticket")].into()),
            })
            .unwrap();
        assert!(snippet.contains("model: 'Ticket'"));
    }

    #[test]
    fn test_curl_method_override_applies_to_bare_path() {
        let mut request = curl_request("/contacts".into());
        request.method = Some(HttpVerb::Post);

        let snippet = generator().curl(&request).unwrap();
        assert!(snippet.starts_with("curl --request POST \\\n"));
    }

    #[test]
    fn test_curl_mapping_verb_beats_method_override() {
        let mut request = curl_request(EndpointMapping::new(HttpVerb::Patch, "/deals").into());
        request.method = Some(HttpVerb::Delete);

        let snippet = generator().curl(&request).unwrap();
        assert!(snippet.starts_with("curl --request PATCH \\\n"));
        assert!(snippet.contains("--url https://api.nango.dev/v1/deals \\\n"));
    }

    #[test]
    fn test_curl_trims_trailing_slash_from_base_url() {
        let mut request = curl_request("/x".into());
        request.base_url = "http://localhost:3003/".to_string();

        let snippet = generator().curl(&request).unwrap();
        assert!(snippet.contains("--url http://localhost:3003/v1/x \\"));
    }

    #[test]
    fn test_curl_malformed_endpoint_fails() {
        let request = curl_request(EndpointDescriptor::Sequence(vec![]));
        let err = generator().curl(&request).unwrap_err();
        assert!(err.is_malformed_endpoint());
    }

    #[test]
    fn test_curl_empty_text_body_has_no_data_line() {
        let mut request = curl_request("/x".into());
        request.input = Some(SamplePayload::from(""));

        let snippet = generator().curl(&request).unwrap();
        assert!(!snippet.contains("--data"));
    }

    #[test]
    fn test_curl_quotes_in_headers_and_body_are_shell_escaped() {
        let mut request = curl_request(EndpointMapping::new(HttpVerb::Post, "/people").into());
        request.credential = Credential::new("sk'1");
        request.connection_id = "o'brien".into();
        request.input = Some(SamplePayload::from(serde_json::json!({"name": "O'Brien"})));

        let snippet = generator().curl(&request).unwrap();
        assert!(snippet.contains("--header 'Authorization: Bearer sk'\\''1' \\\n"));
        assert!(snippet.contains("--header 'Connection-Id: o'\\''brien' \\\n"));
        assert!(snippet.contains("\"name\": \"<O'\\''Brien>\""));
    }

    #[test]
    fn test_curl_undefined_text_body_has_no_data_line() {
        let mut request = curl_request("/x".into());
        request.input = Some(SamplePayload::from("undefined"));

        let snippet = generator().curl(&request).unwrap();
        assert!(!snippet.contains("--data"));
        assert!(snippet.ends_with("--header 'Provider-Config-Key: github'\n"));
    }

    #[test]
    fn test_typescript_values_are_escaped() {
        let snippet = generator()
            .trigger_action(&TriggerActionRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk'x"),
                connection_id: "o'brien".into(),
                provider_config_key: "p".into(),
                action_name: "say-'hi'".to_string(),
                input: Some(SamplePayload::from("it's")),
                safe_input: false,
            })
            .unwrap();
        assert!(snippet.contains("secretKey: 'sk\\'x'"));
        assert!(snippet.contains("    'o\\'brien',\n"));
        assert!(snippet.contains("    'say-\\'hi\\'',\n"));
        assert!(snippet.contains("    '<it\\'s>'\n);"));

        let snippet = generator()
            .start_sync(&StartSyncRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk"),
                provider: "p".into(),
                sync_name: "a'b".to_string(),
            })
            .unwrap();
        assert!(snippet.contains("['a\\'b']"));
    }

    #[test]
    fn test_custom_config_changes_identifiers() {
        let config = SnippetConfig::builder()
            .masked_secret("<YOUR-KEY>")
            .api_prefix("/v2")
            .client(snippet_core::ClientConfig {
                package: "@acme/node".to_string(),
                class_name: "Acme".to_string(),
                binding: "acme".to_string(),
            })
            .build();
        let generator = SnippetGenerator::with_config(config).unwrap();

        let snippet = generator
            .start_sync(&StartSyncRequest {
                context: RenderContext::production(),
                credential: Credential::new("sk"),
                provider: "p".into(),
                sync_name: "s".to_string(),
            })
            .unwrap();
        assert!(snippet.starts_with("import Acme from '@acme/node';"));
        assert!(snippet.contains("const acme = new Acme({ secretKey: '<YOUR-KEY>' });"));
        assert!(snippet.contains("await acme.startSync("));

        let mut request = curl_request("/x".into());
        request.context = RenderContext::production();
        let curl = generator.curl(&request).unwrap();
        assert!(curl.contains("/v2/x"));
        assert!(curl.contains("Bearer <YOUR-KEY>"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SnippetConfig::builder().indent_width(64).build();
        let err = SnippetGenerator::with_config(config).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_overridden_template_is_used() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("start-sync", "{{provider}}/{{sync_name}}")
            .unwrap();
        let generator = SnippetGenerator::with_engine(SnippetConfig::default(), engine).unwrap();

        let snippet = generator
            .start_sync(&StartSyncRequest {
                context: RenderContext::development(),
                credential: Credential::new("sk"),
                provider: "p".into(),
                sync_name: "s".to_string(),
            })
            .unwrap();
        assert_eq!(snippet, "p/s");
    }

    #[test]
    fn test_generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnippetGenerator>();
    }
}
