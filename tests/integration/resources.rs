//! Integration tests for API keys, domains, segments and templates

use super::*;
use integrations_resend::services::{
    CreateApiKeyRequest, CreateDomainRequest, CreateSegmentRequest, SendBroadcastRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_create_and_remove_api_key() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api-keys"))
        .and(body_json(json!({ "name": "new api key" })))
        .respond_with(success_response(json!({
            "id": "dacf4072-4119-4d88-932f-6202748ac7c8",
            "token": "re_c1tpEyD8_NKFusih9vKVQknRAQfmFcWCv"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api-keys/dacf4072-4119-4d88-932f-6202748ac7c8"))
        .respond_with(success_response(json!({
            "object": "api_key",
            "id": "dacf4072-4119-4d88-932f-6202748ac7c8",
            "deleted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateApiKeyRequest {
        name: "new api key".to_string(),
        ..Default::default()
    };

    let created = client.api_keys().create(&request).await.unwrap();
    assert_eq!(created.id, "dacf4072-4119-4d88-932f-6202748ac7c8");
    assert!(created.token.starts_with("re_"));

    let deleted = client.api_keys().remove(&created.id).await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_legacy_and_current_list_shapes() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api-keys"))
        .respond_with(success_response(json!({
            "data": [{ "id": "k1", "name": "Production", "created_at": "2023-04-08T00:11:13.110779+00:00" }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(success_response(json!({
            "object": "list",
            "has_more": false,
            "data": [{
                "id": "d91cd9bd-1176-453e-8fc1-35364d380206",
                "name": "example.com",
                "status": "not_started",
                "created_at": "2023-04-26T20:21:26.347412+00:00",
                "region": "us-east-1"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let keys = client.api_keys().list().await.unwrap();
    assert_eq!(keys.object, "");
    assert!(!keys.has_more);
    assert_eq!(keys.data[0].name, "Production");

    let domains = client.domains().list().await.unwrap();
    assert_eq!(domains.object, "list");
    assert_eq!(domains.data[0].name, "example.com");
}

#[tokio::test]
async fn test_create_domain_returns_records() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/domains"))
        .and(body_json(json!({ "name": "example.com" })))
        .respond_with(success_response(json!({
            "id": "4dd369bc-aa82-4ff3-97de-514ae3000ee0",
            "name": "example.com",
            "status": "not_started",
            "region": "us-east-1",
            "records": [{
                "record": "SPF",
                "name": "send",
                "type": "MX",
                "ttl": "Auto",
                "status": "not_started",
                "value": "feedback-smtp.us-east-1.amazonses.com",
                "priority": 10
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateDomainRequest {
        name: "example.com".to_string(),
        ..Default::default()
    };

    let domain = client.domains().create(&request).await.unwrap();

    assert_eq!(domain.records[0].record_type, "MX");
    assert_eq!(domain.records[0].priority, Some(10));
}

#[tokio::test]
#[allow(deprecated)]
async fn test_audiences_forward_to_segments() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/segments"))
        .and(body_json(json!({ "name": "Registered Users" })))
        .respond_with(success_response(json!({
            "object": "segment",
            "id": "78261eea-8f8b-4381-83c6-79fa7120f1cf",
            "name": "Registered Users"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateSegmentRequest {
        name: "Registered Users".to_string(),
    };

    let created = client.audiences().create(&request).await.unwrap();

    assert_eq!(created.id, "78261eea-8f8b-4381-83c6-79fa7120f1cf");
}

#[tokio::test]
async fn test_send_broadcast() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/broadcasts/b1/send"))
        .and(body_json(json!({ "scheduled_at": "in 1 min" })))
        .respond_with(success_response(json!({ "id": "b1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = SendBroadcastRequest {
        broadcast_id: "b1".to_string(),
        scheduled_at: Some("in 1 min".to_string()),
    };

    let response = client.broadcasts().send(&request).await.unwrap();

    assert_eq!(response.id, "b1");
}

#[tokio::test]
async fn test_template_lifecycle_by_alias() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/templates/welcome/publish"))
        .respond_with(success_response(json!({ "id": "tpl_1", "object": "template" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/templates/welcome/duplicate"))
        .respond_with(success_response(json!({ "id": "tpl_2", "object": "template" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let published = client.templates().publish("welcome").await.unwrap();
    let copy = client.templates().duplicate("welcome").await.unwrap();

    assert_eq!(published.id, "tpl_1");
    assert_eq!(copy.id, "tpl_2");
}
