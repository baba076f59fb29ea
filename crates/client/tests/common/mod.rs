//! Common test utilities for integration tests.
//!
//! Provides a logged-in client against a wiremock server plus inline JSON
//! bodies shaped like real Splunk responses.

#![allow(dead_code)]

pub use secrecy::SecretString;
pub use serde_json::json;
pub use sst_client::SplunkClient;
pub use sst_config::ConnectionParams;
pub use wiremock::matchers::{body_string_contains, method, path, query_param};
pub use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const APP: &str = "Sustainability_Toolkit";

/// Namespaced path for the test app, e.g. `ns("data/indexes")`.
pub fn ns(rel: &str) -> String {
    format!("/servicesNS/nobody/{APP}/{rel}")
}

/// Connection parameters pointing at the mock server.
pub fn params(server: &MockServer) -> ConnectionParams {
    let addr = server.address();
    let mut params = ConnectionParams::new(
        addr.ip().to_string(),
        addr.port(),
        "admin",
        SecretString::new("changeme".to_string().into()),
    )
    .with_app(APP);
    params.scheme = sst_config::Scheme::Http;
    params.max_retries = 0;
    params
}

/// Mount a login endpoint that always succeeds.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .and(query_param("output_mode", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"sessionKey": "test-session-key"})),
        )
        .mount(server)
        .await;
}

/// A logged-in client for the test app.
pub async fn client(server: &MockServer) -> SplunkClient {
    mount_login(server).await;
    sst_client::connect(&params(server)).await.unwrap()
}

pub fn entries(items: serde_json::Value) -> serde_json::Value {
    json!({ "entry": items })
}

pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "messages": [{"type": "ERROR", "text": "Could not find object"}]
    }))
}

pub fn created() -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({ "entry": [] }))
}
