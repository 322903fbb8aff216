//! Snippet generation for integration platform calls.
//!
//! Renders ready-to-paste usage examples from request metadata in five
//! formats: records listing, action invocation, raw HTTP (curl), sync start,
//! and metadata set. Rendering is pure: nothing is executed, validated, or
//! stored.
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::{SnippetGenerator, TriggerActionRequest};
//! use snippet_core::{Credential, RenderContext, SamplePayload};
//! use serde_json::json;
//!
//! let generator = SnippetGenerator::new().unwrap();
//! let snippet = generator
//!     .trigger_action(&TriggerActionRequest {
//!         context: RenderContext::development(),
//!         credential: Credential::new("sk-dev"),
//!         connection_id: "conn-1".into(),
//!         provider_config_key: "github".into(),
//!         action_name: "create-issue".to_string(),
//!         input: Some(SamplePayload::from(json!({"title": "Bug"}))),
//!         safe_input: false,
//!     })
//!     .unwrap();
//!
//! assert!(snippet.contains("\"title\": \"<Bug>\""));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod escape;
pub mod generator;
pub mod payload;
pub mod request;
pub mod secret;
pub mod template_engine;
pub mod types;

pub use generator::SnippetGenerator;
pub use payload::{PayloadAnnotator, annotate};
pub use request::{
    CurlRequest, ListRecordsRequest, SetMetadataRequest, SnippetRequest, StartSyncRequest,
    TriggerActionRequest,
};
pub use secret::present;
pub use types::{RenderedSnippet, SnippetFormat, SnippetLanguage};
