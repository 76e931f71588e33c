//! Integration tests for contacts and list pagination

use super::*;
use integrations_resend::services::{
    ContactSegmentRequest, CreateContactRequest, TopicSubscription, TopicSubscriptionUpdate,
    UpdateContactTopicsRequest,
};
use integrations_resend::ListOptions;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::Mock;

fn contact(id: &str, email: &str) -> serde_json::Value {
    json!({
        "object": "contact",
        "id": id,
        "email": email,
        "first_name": null,
        "last_name": null,
        "created_at": "2023-10-06T23:47:56.678Z",
        "unsubscribed": false
    })
}

#[tokio::test]
async fn test_list_contacts_paginates_with_cursor() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/audiences/A/contacts"))
        .and(query_param("limit", "2"))
        .respond_with(success_response(json!({
            "object": "list",
            "has_more": true,
            "data": [contact("c1", "one@example.com"), contact("c2", "two@example.com")]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/audiences/A/contacts"))
        .and(query_param("limit", "2"))
        .and(query_param("after", "c2"))
        .respond_with(success_response(json!({
            "object": "list",
            "has_more": false,
            "data": [contact("c3", "three@example.com")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = ListOptions::new().limit(2);

    let first = client.audience_contacts().list("A", &options).await.unwrap();
    assert!(first.has_more);
    assert_eq!(first.len(), 2);

    let next = options.next_after(&first).unwrap();
    assert_eq!(next.after.as_deref(), Some("c2"));

    let second = client.audience_contacts().list("A", &next).await.unwrap();
    assert!(!second.has_more);
    assert_eq!(second.data[0].id, "c3");
    assert!(next.next_after(&second).is_none());
}

#[tokio::test]
async fn test_collect_all_pages() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(success_response(json!({
            "object": "list",
            "has_more": true,
            "data": [contact("c1", "one@example.com")]
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("after", "c1"))
        .respond_with(success_response(json!({
            "object": "list",
            "has_more": false,
            "data": [contact("c2", "two@example.com")]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut options = Some(ListOptions::new());
    let mut emails = Vec::new();
    while let Some(current) = options {
        let page = client.contacts().list(&current).await.unwrap();
        options = current.next_after(&page);
        emails.extend(page.into_items().into_iter().map(|c| c.email));
    }

    assert_eq!(emails, vec!["one@example.com", "two@example.com"]);
}

#[tokio::test]
async fn test_create_audience_contact() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/audiences/A/contacts"))
        .and(body_json(json!({ "email": "steve.wozniak@gmail.com", "first_name": "Steve" })))
        .respond_with(success_response(json!({
            "object": "contact",
            "id": "479e3145-dd38-476b-932c-529ceb705947"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateContactRequest {
        audience_id: "A".to_string(),
        email: "steve.wozniak@gmail.com".to_string(),
        first_name: Some("Steve".to_string()),
        ..Default::default()
    };

    let response = client.audience_contacts().create(&request).await.unwrap();

    assert_eq!(response.object, "contact");
    assert_eq!(response.id, "479e3145-dd38-476b-932c-529ceb705947");
}

#[tokio::test]
async fn test_contact_segment_membership() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/contacts/c1/segments/s1"))
        .respond_with(success_response(json!({ "id": "s1" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/c1/segments/s1"))
        .respond_with(success_response(json!({ "id": "s1", "deleted": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ContactSegmentRequest {
        segment_id: "s1".to_string(),
        contact_id: "c1".to_string(),
        ..Default::default()
    };

    client.contacts().segments().add(&request).await.unwrap();
    let removed = client.contacts().segments().remove(&request).await.unwrap();

    assert!(removed.deleted);
}

#[tokio::test]
async fn test_update_contact_topics_sends_array() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("PATCH"))
        .and(path("/contacts/c1/topics"))
        .and(body_json(json!([{ "id": "t1", "subscription": "opt_out" }])))
        .respond_with(success_response(json!({ "id": "c1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = UpdateContactTopicsRequest {
        id_or_email: "c1".to_string(),
        topics: vec![TopicSubscriptionUpdate::new("t1", TopicSubscription::OptOut)],
    };

    let response = client.contacts().topics().update(&request).await.unwrap();

    assert_eq!(response.id, "c1");
}

#[tokio::test]
async fn test_identifier_cannot_escape_contact_path() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/contacts/..%2Fapi-keys%2Fk"))
        .respond_with(success_response(json!({ "object": "contact", "deleted": true })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api-keys/k"))
        .respond_with(success_response(json!({ "object": "api_key", "deleted": true })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let removed = client.contacts().remove("../api-keys/k").await.unwrap();

    assert!(removed.deleted);
}
