//! Core types, configuration, and errors for integration snippet generation.
//!
//! This crate provides the foundational types used by the snippet renderers
//! in `snippet-codegen`.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`ConnectionId`, `ProviderConfigKey`, `Credential`)
//! - The per-call `RenderContext` carrying the deployment mode
//! - Endpoint descriptors and their resolution into a concrete verb and path
//! - Sample payloads and model selectors supplied by callers
//! - Error hierarchy with contextual information
//! - Configuration types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod context;
mod endpoint;
mod error;
mod payload;
mod types;

pub use config::{ClientConfig, DEFAULT_MASKED_SECRET, SnippetConfig, SnippetConfigBuilder};
pub use context::{Credential, RenderContext};
pub use endpoint::{EndpointDescriptor, EndpointMapping, HttpVerb, ResolvedEndpoint};
pub use error::{Error, Result};
pub use payload::{ModelSelector, SamplePayload, SyncModel};
pub use types::{ConnectionId, ProviderConfigKey};
