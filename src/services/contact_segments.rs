//! Segment membership of contacts: `/contacts/{id_or_email}/segments`.

use super::{require, segment};
use super::segments::Segment;
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::{ResendError, ResendResult};
use crate::pagination::{ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};

const SEGMENT_ID_REQUIRED: &str = "Segment ID cannot be empty";

/// Service for adding contacts to and removing them from segments.
pub struct ContactSegmentsService<'a> {
    client: &'a ResendClient,
}

impl<'a> ContactSegmentsService<'a> {
    /// Creates a new contact segments service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Lists the segments a contact belongs to.
    pub async fn list(&self, request: &ListContactSegmentsRequest) -> ResendResult<ListContactSegmentsResponse> {
        self.list_with_context(&RequestContext::background(), request)
            .await
    }

    /// Lists the segments a contact belongs to.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        request: &ListContactSegmentsRequest,
    ) -> ResendResult<ListContactSegmentsResponse> {
        let contact = contact_key(&request.contact_id, &request.email)?;
        let path = request
            .options
            .apply(&format!("/contacts/{}/segments", segment(contact)?))?;
        self.client.get(ctx, &path).await
    }

    /// Adds a contact to a segment.
    pub async fn add(&self, request: &ContactSegmentRequest) -> ResendResult<AddContactSegmentResponse> {
        self.add_with_context(&RequestContext::background(), request)
            .await
    }

    /// Adds a contact to a segment.
    pub async fn add_with_context(
        &self,
        ctx: &RequestContext,
        request: &ContactSegmentRequest,
    ) -> ResendResult<AddContactSegmentResponse> {
        let path = request.path()?;
        self.client.post_empty(ctx, &path).await
    }

    /// Removes a contact from a segment.
    pub async fn remove(&self, request: &ContactSegmentRequest) -> ResendResult<RemoveContactSegmentResponse> {
        self.remove_with_context(&RequestContext::background(), request)
            .await
    }

    /// Removes a contact from a segment.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        request: &ContactSegmentRequest,
    ) -> ResendResult<RemoveContactSegmentResponse> {
        let path = request.path()?;
        self.client.delete(ctx, &path).await
    }
}

/// Picks the contact id, falling back to the email.
fn contact_key<'r>(contact_id: &'r str, email: &'r str) -> ResendResult<&'r str> {
    if !contact_id.trim().is_empty() {
        Ok(contact_id)
    } else if !email.trim().is_empty() {
        Ok(email)
    } else {
        Err(ResendError::validation(
            "Either contact ID or email must be provided",
        ))
    }
}

/// Request to list a contact's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContactSegmentsRequest {
    /// Contact id.
    pub contact_id: String,
    /// Contact email, used when `contact_id` is empty.
    pub email: String,
    /// Pagination.
    pub options: ListOptions,
}

/// Request to add a contact to, or remove it from, a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSegmentRequest {
    /// Segment id.
    pub segment_id: String,
    /// Contact id.
    pub contact_id: String,
    /// Contact email, used when `contact_id` is empty.
    pub email: String,
}

impl ContactSegmentRequest {
    fn path(&self) -> ResendResult<String> {
        require(&self.segment_id, SEGMENT_ID_REQUIRED)?;
        let contact = contact_key(&self.contact_id, &self.email)?;
        Ok(format!(
            "/contacts/{}/segments/{}",
            segment(contact)?,
            segment(&self.segment_id)?
        ))
    }
}

/// A page of segments.
pub type ListContactSegmentsResponse = ListResponse<Segment>;
/// Response to adding a contact to a segment.
pub type AddContactSegmentResponse = ResourceRef;
/// Response to removing a contact from a segment.
pub type RemoveContactSegmentResponse = DeletedResponse;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::create_test_client;
    use crate::transport::HttpMethod;
    use test_case::test_case;

    #[tokio::test]
    async fn test_add_by_email() {
        let (client, transport) = create_test_client();
        transport.enqueue_json_response(200, r#"{"id":"s1"}"#);

        let request = ContactSegmentRequest {
            segment_id: "s1".to_string(),
            email: "steve@example.com".to_string(),
            ..Default::default()
        };
        let response = client.contacts().segments().add(&request).await.unwrap();

        assert_eq!(response.id, "s1");
        transport.verify_request(0, HttpMethod::Post, "/contacts/steve@example.com/segments/s1");
        assert!(transport.last_request().unwrap().body.is_none());
    }

    #[tokio::test]
    async fn test_remove_prefers_contact_id() {
        let (client, transport) = create_test_client();
        transport.enqueue_json_response(200, r#"{"id":"s1","deleted":true}"#);

        let request = ContactSegmentRequest {
            segment_id: "s1".to_string(),
            contact_id: "c1".to_string(),
            email: "steve@example.com".to_string(),
        };
        let response = client.contacts().segments().remove(&request).await.unwrap();

        assert!(response.deleted);
        transport.verify_request(0, HttpMethod::Delete, "/contacts/c1/segments/s1");
    }

    #[tokio::test]
    async fn test_list() {
        let (client, transport) = create_test_client();
        transport.enqueue_json_response(
            200,
            r#"{"object":"list","has_more":false,"data":[{"id":"s1","name":"Registered Users"}]}"#,
        );

        let request = ListContactSegmentsRequest {
            contact_id: "c1".to_string(),
            options: ListOptions::new().limit(10),
            ..Default::default()
        };
        let page = client.contacts().segments().list(&request).await.unwrap();

        assert_eq!(page.data[0].name, "Registered Users");
        transport.verify_request(0, HttpMethod::Get, "/contacts/c1/segments?limit=10");
    }

    #[test_case("", "c1", "", "Segment ID cannot be empty" ; "missing segment")]
    #[test_case("s1", "", "", "Either contact ID or email must be provided" ; "missing contact")]
    #[tokio::test]
    async fn test_validation(segment_id: &str, contact_id: &str, email: &str, message: &str) {
        let (client, transport) = create_test_client();

        let request = ContactSegmentRequest {
            segment_id: segment_id.to_string(),
            contact_id: contact_id.to_string(),
            email: email.to_string(),
        };
        let err = client.contacts().segments().add(&request).await.unwrap_err();

        assert_eq!(err.message(), message);
        transport.verify_request_count(0);
    }

    #[tokio::test]
    async fn test_list_requires_contact() {
        let (client, transport) = create_test_client();

        let result = client
            .contacts()
            .segments()
            .list(&ListContactSegmentsRequest::default())
            .await;

        assert!(result.is_err());
        transport.verify_request_count(0);
    }
}
