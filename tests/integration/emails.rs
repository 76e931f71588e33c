//! Integration tests for email sending

use super::*;
use integrations_resend::services::{
    BatchSendOptions, BatchValidation, SendEmailOptions, SendEmailRequest, UpdateEmailRequest,
};
use integrations_resend::Attachment;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_send_email_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer k"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header_exists("User-Agent"))
        .and(body_json(json!({ "to": ["d@e.com"] })))
        .respond_with(success_response(json!({ "id": "1923781293" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_key(&mock_server, "k");
    let request = SendEmailRequest {
        to: vec!["d@e.com".to_string()],
        ..Default::default()
    };

    let response = client.emails().send(&request).await.unwrap();

    assert_eq!(response.id, "1923781293");
}

#[tokio::test]
async fn test_send_email_with_idempotency_key_and_attachment() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Idempotency-Key", "welcome-user/123"))
        .respond_with(success_response(json!({ "id": "e1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = SendEmailRequest {
        from: "Acme <onboarding@resend.dev>".to_string(),
        to: vec!["delivered@resend.dev".to_string()],
        subject: "Invoice".to_string(),
        text: Some("attached".to_string()),
        attachments: Some(vec![Attachment::from_content("invoice.txt", b"hello".to_vec())]),
        ..Default::default()
    };
    let options = SendEmailOptions {
        idempotency_key: Some("welcome-user/123".to_string()),
    };

    client.emails().send_with_options(&request, &options).await.unwrap();

    let body = received_body(&mock_server, 0).await;
    assert_eq!(
        body["attachments"],
        json!([{ "content": "aGVsbG8=", "filename": "invoice.txt" }])
    );
}

#[tokio::test]
async fn test_batch_send_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/emails/batch"))
        .and(header("x-batch-validation", "permissive"))
        .respond_with(success_response(json!({
            "data": [{ "id": "ae2014de-c168-4c61-8267-70d2662a1ce1" }],
            "errors": [{ "index": 1, "message": "The `to` field is missing." }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let emails = vec![
        SendEmailRequest {
            from: "Acme <onboarding@resend.dev>".to_string(),
            to: vec!["foo@gmail.com".to_string()],
            subject: "hello world".to_string(),
            html: Some("<h1>it works!</h1>".to_string()),
            ..Default::default()
        },
        SendEmailRequest {
            from: "Acme <onboarding@resend.dev>".to_string(),
            subject: "world hello".to_string(),
            html: Some("<p>it works!</p>".to_string()),
            ..Default::default()
        },
    ];
    let options = BatchSendOptions {
        validation: Some(BatchValidation::Permissive),
        ..Default::default()
    };

    let response = client.batch().send_with_options(&emails, &options).await.unwrap();

    assert_eq!(response.data.len(), 1);
    let errors = response.errors.unwrap();
    assert_eq!(errors[0].index, 1);

    let body = received_body(&mock_server, 0).await;
    assert!(body.is_array());
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_reschedule_and_cancel_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("PATCH"))
        .and(path("/emails/e1"))
        .and(body_json(json!({ "scheduled_at": "2024-08-05T11:52:01.858Z" })))
        .respond_with(success_response(json!({ "object": "email", "id": "e1" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/emails/e1/cancel"))
        .respond_with(success_response(json!({ "object": "email", "id": "e1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let update = UpdateEmailRequest {
        id: "e1".to_string(),
        scheduled_at: Some("2024-08-05T11:52:01.858Z".to_string()),
    };

    let updated = client.emails().update(&update).await.unwrap();
    let cancelled = client.emails().cancel("e1").await.unwrap();

    assert_eq!(updated.id, "e1");
    assert_eq!(cancelled.object, "email");
}

#[tokio::test]
async fn test_get_email_safe_method_has_no_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/emails/e1"))
        .respond_with(success_response(json!({
            "object": "email",
            "id": "e1",
            "to": ["delivered@resend.dev"],
            "from": "Acme <onboarding@resend.dev>",
            "subject": "hello world",
            "last_event": "delivered"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let email = client.emails().get("e1").await.unwrap();

    assert_eq!(email.last_event.as_deref(), Some("delivered"));
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}
