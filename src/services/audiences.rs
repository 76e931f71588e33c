//! Audience operations.
//!
//! Audiences are the former name of segments. This service forwards to
//! [`SegmentsService`] and keeps the old type names as aliases.

use super::segments::*;
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::ListOptions;

/// Request to create an audience.
pub type CreateAudienceRequest = CreateSegmentRequest;
/// Response to an audience create.
pub type CreateAudienceResponse = CreateSegmentResponse;
/// An audience.
pub type Audience = Segment;
/// A page of audiences.
pub type ListAudiencesResponse = ListSegmentsResponse;
/// Response to an audience delete.
pub type RemoveAudienceResponse = RemoveSegmentResponse;

/// Service for audience operations.
pub struct AudiencesService<'a> {
    segments: SegmentsService<'a>,
}

impl<'a> AudiencesService<'a> {
    /// Creates a new audiences service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self {
            segments: SegmentsService::new(client),
        }
    }

    /// Creates an audience.
    pub async fn create(&self, request: &CreateAudienceRequest) -> ResendResult<CreateAudienceResponse> {
        self.segments.create(request).await
    }

    /// Creates an audience.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateAudienceRequest,
    ) -> ResendResult<CreateAudienceResponse> {
        self.segments.create_with_context(ctx, request).await
    }

    /// Gets an audience.
    pub async fn get(&self, audience_id: &str) -> ResendResult<Audience> {
        self.segments.get(audience_id).await
    }

    /// Gets an audience.
    pub async fn get_with_context(&self, ctx: &RequestContext, audience_id: &str) -> ResendResult<Audience> {
        self.segments.get_with_context(ctx, audience_id).await
    }

    /// Lists audiences.
    pub async fn list(&self) -> ResendResult<ListAudiencesResponse> {
        self.segments.list().await
    }

    /// Lists audiences with pagination.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListAudiencesResponse> {
        self.segments.list_with_context(ctx, options).await
    }

    /// Deletes an audience.
    pub async fn remove(&self, audience_id: &str) -> ResendResult<RemoveAudienceResponse> {
        self.segments.remove(audience_id).await
    }

    /// Deletes an audience.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        audience_id: &str,
    ) -> ResendResult<RemoveAudienceResponse> {
        self.segments.remove_with_context(ctx, audience_id).await
    }
}
