//! Segment operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::DeletedResponse;
use serde::{Deserialize, Serialize};

/// Service for segment operations.
pub struct SegmentsService<'a> {
    client: &'a ResendClient,
}

impl<'a> SegmentsService<'a> {
    /// Creates a new segments service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a segment.
    pub async fn create(&self, request: &CreateSegmentRequest) -> ResendResult<CreateSegmentResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a segment.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateSegmentRequest,
    ) -> ResendResult<CreateSegmentResponse> {
        require(&request.name, "Segment name cannot be empty")?;
        self.client.post(ctx, "/segments", request).await
    }

    /// Gets a segment.
    pub async fn get(&self, segment_id: &str) -> ResendResult<Segment> {
        self.get_with_context(&RequestContext::background(), segment_id)
            .await
    }

    /// Gets a segment.
    pub async fn get_with_context(&self, ctx: &RequestContext, segment_id: &str) -> ResendResult<Segment> {
        require(segment_id, "Segment ID cannot be empty")?;
        self.client.get(ctx, &format!("/segments/{}", segment(segment_id)?)).await
    }

    /// Lists segments.
    pub async fn list(&self) -> ResendResult<ListSegmentsResponse> {
        self.list_with_options(&ListOptions::default()).await
    }

    /// Lists segments with pagination.
    pub async fn list_with_options(&self, options: &ListOptions) -> ResendResult<ListSegmentsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists segments with pagination.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListSegmentsResponse> {
        self.client.get(ctx, &options.apply("/segments")?).await
    }

    /// Deletes a segment.
    pub async fn remove(&self, segment_id: &str) -> ResendResult<RemoveSegmentResponse> {
        self.remove_with_context(&RequestContext::background(), segment_id)
            .await
    }

    /// Deletes a segment.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        segment_id: &str,
    ) -> ResendResult<RemoveSegmentResponse> {
        require(segment_id, "Segment ID cannot be empty")?;
        self.client
            .delete(ctx, &format!("/segments/{}", segment(segment_id)?))
            .await
    }
}

/// Request to create a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSegmentRequest {
    /// Segment name.
    pub name: String,
}

/// Response to a segment create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSegmentResponse {
    pub object: String,
    pub id: String,
    pub name: String,
}

/// A named group of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub object: String,
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl HasId for Segment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of segments.
pub type ListSegmentsResponse = ListResponse<Segment>;

/// Response to a segment delete.
pub type RemoveSegmentResponse = DeletedResponse;
