//! Client behaviour against a mock Dialpad API.

use dialpad_client::{ClientError, ClientOptions, DialpadClient, Method};
use dialpad_core::WebhookResponse;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> DialpadClient {
    DialpadClient::with_options(TOKEN, ClientOptions::with_base_url(server.uri()))
        .expect("client should build")
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn execute_sends_bearer_and_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webhooks/42"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = client.build(Method::GET, "/webhooks/42", None).unwrap();
    client.execute(request).await.unwrap();
}

#[tokio::test]
async fn every_verb_carries_the_token() {
    let server = MockServer::start().await;
    Mock::given(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(4)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for verb in [Method::GET, Method::POST, Method::PATCH, Method::DELETE] {
        let request = client.build(verb, "/webhooks", None).unwrap();
        client.execute(request).await.unwrap();
    }

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
    for request in received {
        assert_eq!(
            request.headers.get("authorization").unwrap(),
            "Bearer test-token"
        );
    }
}

// ============================================================================
// Success path
// ============================================================================

#[tokio::test]
async fn success_returns_raw_body_unaltered() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = vec![0x7b, 0x20, 0xff, 0x00, 0x0a, 0x7d];
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = client.build(Method::GET, "/raw", None).unwrap();
    let body = client.execute(request).await.unwrap();

    assert_eq!(body.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn post_sends_serialized_body_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(body_json(json!({ "hook_url": "https://example.com/hook" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "hook_url": "https://example.com/hook",
            "signature": { "algo": "", "secret": "", "type": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let webhook: WebhookResponse = client
        .post("/webhooks", &json!({ "hook_url": "https://example.com/hook" }))
        .await
        .unwrap();

    assert_eq!(webhook.id.as_str(), "42");
}

#[tokio::test]
async fn invalid_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webhooks/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get::<WebhookResponse>("/webhooks/42")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

// ============================================================================
// Error path
// ============================================================================

#[tokio::test]
async fn error_status_with_envelope_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/webhooks/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "not found" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete("/webhooks/42").await.unwrap_err();

    match err {
        ClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_error_message_is_verbatim() {
    let server = MockServer::start().await;
    let message = "hook_url: \"ftp://x\" is not a valid https URL";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": message }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = client
        .build(Method::POST, "/webhooks", Some(b"{}".to_vec()))
        .unwrap();
    let err = client.execute(request).await.unwrap_err();

    assert!(matches!(&err, ClientError::Api { message: m, .. } if m == message));
    assert_eq!(err.to_string(), format!("Dialpad error: {message}"));
}

#[tokio::test]
async fn error_status_with_garbage_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get::<WebhookResponse>("/webhooks/42")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::MalformedErrorResponse { status: 503, .. }
    ));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Port 1 is reserved and nothing listens on it.
    let options = ClientOptions::with_base_url("http://127.0.0.1:1");
    let client = DialpadClient::with_options(TOKEN, options).unwrap();

    let err = client.delete("/webhooks/42").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let options = ClientOptions::with_base_url(server.uri()).timeout_seconds(1);
    let client = DialpadClient::with_options(TOKEN, options).unwrap();
    let request = client.build(Method::GET, "/webhooks/42", None).unwrap();
    let err = client.execute(request).await.unwrap_err();

    match err {
        ClientError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected Transport error, got {other:?}"),
    }
}
