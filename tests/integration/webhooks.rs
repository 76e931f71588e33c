//! Integration tests for webhook verification and endpoint management

use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Duration, Utc};
use integrations_resend::services::CreateWebhookRequest;
use integrations_resend::{ResendErrorKind, WebhookHeaders, WebhookVerifier};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::Mock;

const BODY: &[u8] = br#"{"type":"email.sent"}"#;

fn zero_key_secret() -> String {
    format!("whsec_{}", STANDARD.encode([0u8; 32]))
}

#[test]
fn test_verify_delivery_within_tolerance() {
    let verifier = WebhookVerifier::new(&zero_key_secret()).unwrap();
    let timestamp = Utc::now().timestamp().to_string();
    let signature = verifier.sign("msg_123", &timestamp, BODY).unwrap();

    let headers = WebhookHeaders::new("msg_123", timestamp, signature);

    assert!(verifier.verify(&headers, BODY).is_ok());
}

#[test]
fn test_tampered_body_is_rejected() {
    let verifier = WebhookVerifier::new(&zero_key_secret()).unwrap();
    let timestamp = Utc::now().timestamp().to_string();
    let signature = verifier.sign("msg_123", &timestamp, BODY).unwrap();
    let headers = WebhookHeaders::new("msg_123", timestamp, signature);

    let mut tampered = BODY.to_vec();
    tampered[2] = b'T';
    let err = verifier.verify(&headers, &tampered).unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::WebhookSignature);
}

#[test]
fn test_stale_timestamp_is_rejected() {
    let verifier = WebhookVerifier::new(&zero_key_secret()).unwrap();
    let timestamp = (Utc::now() - Duration::minutes(10)).timestamp().to_string();
    let signature = verifier.sign("msg_123", &timestamp, BODY).unwrap();
    let headers = WebhookHeaders::new("msg_123", timestamp, signature);

    let err = verifier.verify(&headers, BODY).unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::WebhookTimestamp);
}

#[test]
fn test_rotated_secret_signature_list() {
    let verifier = WebhookVerifier::new(&zero_key_secret()).unwrap();
    let previous = WebhookVerifier::new(&format!("whsec_{}", STANDARD.encode([7u8; 32]))).unwrap();
    let timestamp = Utc::now().timestamp().to_string();
    let old = previous.sign("msg_123", &timestamp, BODY).unwrap();
    let current = verifier.sign("msg_123", &timestamp, BODY).unwrap();

    let headers = WebhookHeaders::from_pairs([
        ("svix-id", "msg_123"),
        ("svix-timestamp", timestamp.as_str()),
        ("svix-signature", format!("{} {}", old, current).as_str()),
    ])
    .unwrap();

    assert!(verifier.verify(&headers, BODY).is_ok());
}

#[tokio::test]
async fn test_created_endpoint_secret_verifies_deliveries() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .respond_with(success_response(json!({
            "object": "webhook",
            "id": "4dd369bc-aa82-4ff3-97de-514ae3000ee0",
            "signing_secret": zero_key_secret()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateWebhookRequest {
        endpoint: "https://webhook.example.com/handler".to_string(),
        events: vec!["email.sent".to_string()],
    };
    let created = client.webhooks().create(&request).await.unwrap();

    let verifier = WebhookVerifier::new(&created.signing_secret).unwrap();
    let timestamp = Utc::now().timestamp().to_string();
    let signature = verifier.sign("msg_1", &timestamp, BODY).unwrap();
    let headers = WebhookHeaders::new("msg_1", timestamp, signature);

    assert!(verifier.verify(&headers, BODY).is_ok());
}
