//! Topic subscriptions of contacts: `/contacts/{id_or_email}/topics`.

use super::{require, segment};
use super::topics::TopicSubscription;
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::{ResendError, ResendResult};
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::ResourceRef;
use serde::{Deserialize, Serialize};

const IDENTIFIER_REQUIRED: &str = "Contact ID or email cannot be empty";

/// Service for a contact's topic subscriptions.
pub struct ContactTopicsService<'a> {
    client: &'a ResendClient,
}

impl<'a> ContactTopicsService<'a> {
    /// Creates a new contact topics service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Lists a contact's topic subscriptions.
    pub async fn list(&self, id_or_email: &str, options: &ListOptions) -> ResendResult<ListContactTopicsResponse> {
        self.list_with_context(&RequestContext::background(), id_or_email, options)
            .await
    }

    /// Lists a contact's topic subscriptions.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        id_or_email: &str,
        options: &ListOptions,
    ) -> ResendResult<ListContactTopicsResponse> {
        require(id_or_email, IDENTIFIER_REQUIRED)?;
        let path = options.apply(&format!("/contacts/{}/topics", segment(id_or_email)?))?;
        self.client.get(ctx, &path).await
    }

    /// Opts a contact in or out of topics.
    ///
    /// The request body is the bare array of `{ id, subscription }` entries.
    pub async fn update(&self, request: &UpdateContactTopicsRequest) -> ResendResult<UpdateContactTopicsResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Opts a contact in or out of topics.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateContactTopicsRequest,
    ) -> ResendResult<UpdateContactTopicsResponse> {
        require(&request.id_or_email, IDENTIFIER_REQUIRED)?;
        if request.topics.is_empty() {
            return Err(ResendError::validation("Topics cannot be empty"));
        }
        self.client
            .patch(
                ctx,
                &format!("/contacts/{}/topics", segment(&request.id_or_email)?),
                &request.topics,
            )
            .await
    }
}

/// A contact's subscription to one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTopic {
    /// Topic id.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Current subscription state.
    pub subscription: TopicSubscription,
}

impl HasId for ContactTopic {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One entry of a topic subscription update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSubscriptionUpdate {
    /// Topic id.
    pub id: String,
    /// New subscription state.
    pub subscription: TopicSubscription,
}

impl TopicSubscriptionUpdate {
    /// Creates an update entry.
    pub fn new(id: impl Into<String>, subscription: TopicSubscription) -> Self {
        Self {
            id: id.into(),
            subscription,
        }
    }
}

/// Request to update a contact's topic subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateContactTopicsRequest {
    /// Contact id or email.
    pub id_or_email: String,
    /// Subscription changes; must not be empty.
    pub topics: Vec<TopicSubscriptionUpdate>,
}

/// A page of topic subscriptions.
pub type ListContactTopicsResponse = ListResponse<ContactTopic>;
/// Response to a topic subscription update.
pub type UpdateContactTopicsResponse = ResourceRef;
