//! Common test utilities for Dialpad provider integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use dialpad_provider::{Provider, ProviderConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// API key the harness configures.
pub const TOKEN: &str = "test-token";

/// Expected `Authorization` header value.
pub const BEARER: &str = "Bearer test-token";

/// Test harness: a mock Dialpad API and a provider pointed at it.
pub struct TestHarness {
    /// The mock API server.
    pub server: MockServer,
    /// Provider configured against `server`.
    pub provider: Provider,
}

impl TestHarness {
    /// Start a mock server and configure a provider for it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = ProviderConfig::new()
            .with_api_key(TOKEN)
            .with_base_url(server.uri())
            .with_timeout_seconds(5)
            .resolve_with(|_| None)
            .expect("Failed to resolve test configuration");
        let provider = Provider::new(config).expect("Failed to build provider");

        Self { server, provider }
    }

    /// Number of requests the mock server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// Webhook body as the API returns it.
pub fn webhook_body(id: &str, hook_url: &str, secret: &str) -> Value {
    json!({
        "id": id,
        "hook_url": hook_url,
        "signature": {
            "algo": if secret.is_empty() { "" } else { "HS256" },
            "secret": secret,
            "type": if secret.is_empty() { "" } else { "jwt" }
        }
    })
}

/// Call subscription body as the API returns it.
pub fn subscription_body(id: &str, call_states: &[&str], webhook_id: &str) -> Value {
    json!({
        "id": id,
        "call_states": call_states,
        "webhook": webhook_body(webhook_id, "https://example.com/hook", "")
    })
}

/// Error body as the API returns it.
pub fn error_body(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}
