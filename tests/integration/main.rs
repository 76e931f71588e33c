//! Integration tests using WireMock
//!
//! These tests run the client with its real reqwest transport against a mock
//! HTTP server, covering serialization, authentication headers, pagination,
//! error classification and cancellation end to end.

mod cancellation;
mod contacts;
mod emails;
mod errors;
mod resources;
mod webhooks;

use integrations_resend::ResendClient;
use serde_json::Value;
use wiremock::{MockServer, ResponseTemplate};

/// API key used by every test client.
pub const TEST_API_KEY: &str = "re_test_key";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> ResendClient {
    client_with_key(server, TEST_API_KEY)
}

/// Builds a client with a specific key pointed at the mock server.
pub fn client_with_key(server: &MockServer, api_key: &str) -> ResendClient {
    ResendClient::builder()
        .api_key(api_key)
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}

/// JSON success response.
pub fn success_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// JSON error response.
pub fn error_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Decoded body of the `index`-th request the server received.
pub async fn received_body(server: &MockServer, index: usize) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    serde_json::from_slice(&requests[index].body).expect("request body is JSON")
}
