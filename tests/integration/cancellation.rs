//! Integration tests for cancellation and deadlines

use super::*;
use integrations_resend::errors::ResendError;
use integrations_resend::transport::TransportError;
use integrations_resend::{RequestContext, ResendErrorKind};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_cancelled_context_short_circuits() {
    let mock_server = setup_mock_server().await;

    let client = client_for(&mock_server);
    let token = CancellationToken::new();
    token.cancel();
    let ctx = RequestContext::with_token(token);

    let err = client
        .emails()
        .get_with_context(&ctx, "e1")
        .await
        .unwrap_err();

    assert!(matches!(err, ResendError::Transport(TransportError::Cancelled)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(
            success_response(json!({ "object": "list", "data": [] }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ctx = RequestContext::with_token(CancellationToken::new());
    let canceller = ctx.token().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client
        .domains()
        .list_with_context(&ctx, &Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ResendErrorKind::Transport);
    assert!(matches!(err, ResendError::Transport(TransportError::Cancelled)));
}

#[tokio::test]
async fn test_deadline_exceeded() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/emails/e1"))
        .respond_with(success_response(json!({ "id": "e1" })).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ctx = RequestContext::background().with_timeout(Duration::from_millis(50));

    let err = client
        .emails()
        .get_with_context(&ctx, "e1")
        .await
        .unwrap_err();

    assert!(matches!(err, ResendError::Transport(TransportError::DeadlineExceeded)));
}

#[tokio::test]
async fn test_context_does_not_affect_completed_call() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/emails/e1"))
        .respond_with(success_response(json!({ "id": "e1" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(5));

    let email = client.emails().get_with_context(&ctx, "e1").await.unwrap();
    ctx.cancel();

    assert_eq!(email.id, "e1");
}
