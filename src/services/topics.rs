//! Topic operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};
use serde::{Deserialize, Serialize};

const TOPIC_ID_REQUIRED: &str = "Topic ID cannot be empty";

/// Service for topic operations.
pub struct TopicsService<'a> {
    client: &'a ResendClient,
}

impl<'a> TopicsService<'a> {
    /// Creates a new topics service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a topic.
    pub async fn create(&self, request: &CreateTopicRequest) -> ResendResult<CreateTopicResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a topic.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateTopicRequest,
    ) -> ResendResult<CreateTopicResponse> {
        require(&request.name, "Topic name cannot be empty")?;
        self.client.post(ctx, "/topics", request).await
    }

    /// Gets a topic.
    pub async fn get(&self, topic_id: &str) -> ResendResult<Topic> {
        self.get_with_context(&RequestContext::background(), topic_id)
            .await
    }

    /// Gets a topic.
    pub async fn get_with_context(&self, ctx: &RequestContext, topic_id: &str) -> ResendResult<Topic> {
        require(topic_id, TOPIC_ID_REQUIRED)?;
        self.client.get(ctx, &format!("/topics/{}", segment(topic_id)?)).await
    }

    /// Lists topics.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListTopicsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists topics.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListTopicsResponse> {
        self.client.get(ctx, &options.apply("/topics")?).await
    }

    /// Updates a topic.
    pub async fn update(&self, request: &UpdateTopicRequest) -> ResendResult<UpdateTopicResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates a topic.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateTopicRequest,
    ) -> ResendResult<UpdateTopicResponse> {
        require(&request.id, TOPIC_ID_REQUIRED)?;
        self.client
            .patch(ctx, &format!("/topics/{}", segment(&request.id)?), request)
            .await
    }

    /// Deletes a topic.
    pub async fn remove(&self, topic_id: &str) -> ResendResult<RemoveTopicResponse> {
        self.remove_with_context(&RequestContext::background(), topic_id)
            .await
    }

    /// Deletes a topic.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        topic_id: &str,
    ) -> ResendResult<RemoveTopicResponse> {
        require(topic_id, TOPIC_ID_REQUIRED)?;
        self.client.delete(ctx, &format!("/topics/{}", segment(topic_id)?)).await
    }
}

/// Subscription polarity of a contact for a topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSubscription {
    /// Subscribed.
    #[default]
    OptIn,
    /// Unsubscribed.
    OptOut,
    /// A state this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Request to create a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    /// Topic name.
    pub name: String,
    /// Subscription state of contacts that never chose one.
    pub default_subscription: TopicSubscription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to update a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTopicRequest {
    /// Topic id.
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A subscription topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub object: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub default_subscription: TopicSubscription,
    pub created_at: String,
}

impl HasId for Topic {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to a topic create.
pub type CreateTopicResponse = ResourceRef;
/// Response to a topic update.
pub type UpdateTopicResponse = ResourceRef;
/// Response to a topic delete.
pub type RemoveTopicResponse = DeletedResponse;
/// A page of topics.
pub type ListTopicsResponse = ListResponse<Topic>;
