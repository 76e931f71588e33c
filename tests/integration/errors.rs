//! Integration tests for error classification

use super::*;
use integrations_resend::errors::ResendError;
use integrations_resend::services::CreateBroadcastRequest;
use integrations_resend::transport::TransportError;
use integrations_resend::{is_rate_limit_error, ResendErrorKind, ERR_RATE_LIMIT};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_rate_limit_headers_are_exposed_verbatim() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("ratelimit-limit", "10")
                .insert_header("ratelimit-remaining", "0")
                .insert_header("ratelimit-reset", "30")
                .insert_header("retry-after", "5")
                .set_body_json(json!({ "message": "too many" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.domains().list().await.unwrap_err();

    assert!(err == ERR_RATE_LIMIT);
    assert!(is_rate_limit_error(&err));
    let rate_limit = err.rate_limit().unwrap();
    assert_eq!(rate_limit.message, "too many");
    assert_eq!(rate_limit.limit.as_deref(), Some("10"));
    assert_eq!(rate_limit.remaining.as_deref(), Some("0"));
    assert_eq!(rate_limit.reset.as_deref(), Some("30"));
    assert_eq!(rate_limit.retry_after.as_deref(), Some("5"));
    assert_eq!(
        rate_limit.retry_after_duration(),
        Some(std::time::Duration::from_secs(5))
    );
}

#[test_case(429, json!({ "message": "too many" }), ResendErrorKind::RateLimit ; "429 status")]
#[test_case(403, json!({ "message": "You have hit the rate limit" }), ResendErrorKind::RateLimit ; "rate limit message")]
#[test_case(500, json!({ "message": "Too Many Requests" }), ResendErrorKind::RateLimit ; "too many requests message")]
#[test_case(422, json!({ "statusCode": 422, "name": "validation_error", "message": "Invalid `to` field." }), ResendErrorKind::InvalidRequest ; "422 invalid")]
#[test_case(400, json!({ "message": "bad" }), ResendErrorKind::InvalidRequest ; "400 invalid")]
#[test_case(401, json!({ "name": "missing_api_key", "message": "Missing API key" }), ResendErrorKind::Api ; "401 api")]
#[test_case(500, json!({}), ResendErrorKind::Api ; "500 no message")]
#[tokio::test]
async fn test_status_classification(status: u16, body: serde_json::Value, expected: ResendErrorKind) {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api-keys"))
        .respond_with(error_response(status, body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.api_keys().list().await.unwrap_err();

    assert_eq!(err.kind(), expected);
    assert_eq!(err.status_code(), Some(status));
}

#[tokio::test]
async fn test_api_error_without_message_is_unknown() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/domains/d1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.domains().remove("d1").await.unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::Api);
    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.message(), "Unknown Error");
}

#[tokio::test]
async fn test_invalid_request_carries_message() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(error_response(
            422,
            json!({ "statusCode": 422, "name": "validation_error", "message": "Invalid `from` field." }),
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .emails()
        .send(&Default::default())
        .await
        .unwrap_err();

    match err {
        ResendError::InvalidRequest { status, name, message } => {
            assert_eq!(status, 422);
            assert_eq!(name.as_deref(), Some("validation_error"));
            assert_eq!(message, "Invalid `from` field.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/emails/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": "))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.emails().get("e1").await.unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::Decode);
    assert!(!err.to_string().contains("\"id\""));
}

#[tokio::test]
async fn test_no_content_returns_default() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/api-keys/k1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(client.api_keys().remove("k1").await.unwrap());
}

#[tokio::test]
async fn test_validation_error_issues_no_request() {
    let mock_server = setup_mock_server().await;

    let client = client_for(&mock_server);
    let request = CreateBroadcastRequest {
        audience_id: "78261eea-8f8b-4381-83c6-79fa7120f1cf".to_string(),
        subject: "hello world".to_string(),
        ..Default::default()
    };
    let err = client.broadcasts().create(&request).await.unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::Validation);
    assert_eq!(err.message(), "From cannot be empty");
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = integrations_resend::ResendClient::builder()
        .api_key(TEST_API_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.emails().get("e1").await.unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::Transport);
    assert!(matches!(
        err,
        ResendError::Transport(TransportError::Connection(_)) | ResendError::Transport(TransportError::Request(_))
    ));
}
