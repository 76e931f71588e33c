//! Broadcast operations.
//!
//! Broadcasts move through `draft`, `scheduled` and `sent` on the server;
//! the status is reported verbatim.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef, StringOrVec};
use serde::{Deserialize, Serialize};

const BROADCAST_ID_REQUIRED: &str = "Broadcast ID cannot be empty";

/// Service for broadcast operations.
pub struct BroadcastsService<'a> {
    client: &'a ResendClient,
}

impl<'a> BroadcastsService<'a> {
    /// Creates a new broadcasts service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a draft broadcast.
    pub async fn create(&self, request: &CreateBroadcastRequest) -> ResendResult<CreateBroadcastResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a draft broadcast.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateBroadcastRequest,
    ) -> ResendResult<CreateBroadcastResponse> {
        require(&request.from, "From cannot be empty")?;
        require(&request.audience_id, "Audience ID cannot be empty")?;
        require(&request.subject, "Subject cannot be empty")?;
        self.client.post(ctx, "/broadcasts", request).await
    }

    /// Gets a broadcast.
    pub async fn get(&self, broadcast_id: &str) -> ResendResult<Broadcast> {
        self.get_with_context(&RequestContext::background(), broadcast_id)
            .await
    }

    /// Gets a broadcast.
    pub async fn get_with_context(&self, ctx: &RequestContext, broadcast_id: &str) -> ResendResult<Broadcast> {
        require(broadcast_id, BROADCAST_ID_REQUIRED)?;
        self.client
            .get(ctx, &format!("/broadcasts/{}", segment(broadcast_id)?))
            .await
    }

    /// Lists broadcasts.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListBroadcastsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists broadcasts.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListBroadcastsResponse> {
        self.client.get(ctx, &options.apply("/broadcasts")?).await
    }

    /// Updates a draft broadcast.
    pub async fn update(&self, request: &UpdateBroadcastRequest) -> ResendResult<UpdateBroadcastResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates a draft broadcast.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateBroadcastRequest,
    ) -> ResendResult<UpdateBroadcastResponse> {
        require(&request.id, BROADCAST_ID_REQUIRED)?;
        self.client
            .patch(ctx, &format!("/broadcasts/{}", segment(&request.id)?), request)
            .await
    }

    /// Sends a broadcast now, or at `scheduled_at`.
    pub async fn send(&self, request: &SendBroadcastRequest) -> ResendResult<SendBroadcastResponse> {
        self.send_with_context(&RequestContext::background(), request)
            .await
    }

    /// Sends a broadcast now, or at `scheduled_at`.
    pub async fn send_with_context(
        &self,
        ctx: &RequestContext,
        request: &SendBroadcastRequest,
    ) -> ResendResult<SendBroadcastResponse> {
        require(&request.broadcast_id, BROADCAST_ID_REQUIRED)?;
        self.client
            .post(ctx, &format!("/broadcasts/{}/send", segment(&request.broadcast_id)?), request)
            .await
    }

    /// Deletes a draft broadcast.
    pub async fn remove(&self, broadcast_id: &str) -> ResendResult<RemoveBroadcastResponse> {
        self.remove_with_context(&RequestContext::background(), broadcast_id)
            .await
    }

    /// Deletes a draft broadcast.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        broadcast_id: &str,
    ) -> ResendResult<RemoveBroadcastResponse> {
        require(broadcast_id, BROADCAST_ID_REQUIRED)?;
        self.client
            .delete(ctx, &format!("/broadcasts/{}", segment(broadcast_id)?))
            .await
    }
}

/// Request to create a broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBroadcastRequest {
    /// Target audience.
    pub audience_id: String,
    /// Sender address.
    pub from: String,
    /// Subject line.
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<StringOrVec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Internal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restricts delivery to contacts subscribed to this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}

/// Request to update a draft broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBroadcastRequest {
    /// Broadcast id.
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<StringOrVec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request to send a broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendBroadcastRequest {
    /// Broadcast id.
    #[serde(skip)]
    pub broadcast_id: String,
    /// ISO-8601 time or natural language ("in 1 hour").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// A broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    pub object: String,
    pub id: String,
    pub name: Option<String>,
    pub audience_id: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub reply_to: Option<StringOrVec>,
    pub preview_text: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    /// `draft`, `scheduled` or `sent`.
    pub status: String,
    pub created_at: String,
    pub scheduled_at: Option<String>,
    pub sent_at: Option<String>,
}

impl HasId for Broadcast {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to a broadcast create.
pub type CreateBroadcastResponse = ResourceRef;
/// Response to a broadcast update.
pub type UpdateBroadcastResponse = ResourceRef;
/// Response to a broadcast send.
pub type SendBroadcastResponse = ResourceRef;
/// Response to a broadcast delete.
pub type RemoveBroadcastResponse = DeletedResponse;
/// A page of broadcasts.
pub type ListBroadcastsResponse = ListResponse<Broadcast>;
