//! Tests to verify that all public types are Send + Sync as required.

use snippet_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<ConnectionId>();
    assert_send_sync::<ProviderConfigKey>();
    assert_send_sync::<Credential>();
    assert_send_sync::<RenderContext>();
}

#[test]
fn test_endpoint_types_are_send_sync() {
    assert_send_sync::<EndpointDescriptor>();
    assert_send_sync::<EndpointMapping>();
    assert_send_sync::<ResolvedEndpoint>();
    assert_send_sync::<HttpVerb>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<SnippetConfig>();
    assert_send_sync::<ClientConfig>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
