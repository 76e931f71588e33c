//! Outbound webhook endpoint management.
//!
//! Verifying deliveries is handled by [`crate::webhooks::WebhookVerifier`].

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::{ResendError, ResendResult};
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};
use serde::{Deserialize, Serialize};

const WEBHOOK_ID_REQUIRED: &str = "Webhook ID cannot be empty";

/// Service for webhook endpoint operations.
pub struct WebhooksService<'a> {
    client: &'a ResendClient,
}

impl<'a> WebhooksService<'a> {
    /// Creates a new webhooks service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Registers an endpoint. The response carries the signing secret.
    pub async fn create(&self, request: &CreateWebhookRequest) -> ResendResult<CreateWebhookResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Registers an endpoint. The response carries the signing secret.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateWebhookRequest,
    ) -> ResendResult<CreateWebhookResponse> {
        require(&request.endpoint, "Endpoint cannot be empty")?;
        if request.events.is_empty() {
            return Err(ResendError::validation("Events cannot be empty"));
        }
        self.client.post(ctx, "/webhooks", request).await
    }

    /// Gets an endpoint.
    pub async fn get(&self, webhook_id: &str) -> ResendResult<Webhook> {
        self.get_with_context(&RequestContext::background(), webhook_id)
            .await
    }

    /// Gets an endpoint.
    pub async fn get_with_context(&self, ctx: &RequestContext, webhook_id: &str) -> ResendResult<Webhook> {
        require(webhook_id, WEBHOOK_ID_REQUIRED)?;
        self.client
            .get(ctx, &format!("/webhooks/{}", segment(webhook_id)?))
            .await
    }

    /// Lists endpoints.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListWebhooksResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists endpoints.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListWebhooksResponse> {
        self.client.get(ctx, &options.apply("/webhooks")?).await
    }

    /// Updates an endpoint.
    pub async fn update(&self, request: &UpdateWebhookRequest) -> ResendResult<UpdateWebhookResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates an endpoint.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateWebhookRequest,
    ) -> ResendResult<UpdateWebhookResponse> {
        require(&request.id, WEBHOOK_ID_REQUIRED)?;
        self.client
            .patch(ctx, &format!("/webhooks/{}", segment(&request.id)?), request)
            .await
    }

    /// Deletes an endpoint.
    pub async fn remove(&self, webhook_id: &str) -> ResendResult<RemoveWebhookResponse> {
        self.remove_with_context(&RequestContext::background(), webhook_id)
            .await
    }

    /// Deletes an endpoint.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        webhook_id: &str,
    ) -> ResendResult<RemoveWebhookResponse> {
        require(webhook_id, WEBHOOK_ID_REQUIRED)?;
        self.client
            .delete(ctx, &format!("/webhooks/{}", segment(webhook_id)?))
            .await
    }
}

/// Delivery state of an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    /// Receiving deliveries.
    #[default]
    Enabled,
    /// Paused.
    Disabled,
}

/// Request to register an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    /// Destination URL.
    pub endpoint: String,
    /// Event types, e.g. `email.sent`.
    pub events: Vec<String>,
}

/// Request to update an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWebhookRequest {
    /// Webhook id.
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

/// Response to an endpoint registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateWebhookResponse {
    pub object: String,
    pub id: String,
    /// `whsec_` secret for [`crate::webhooks::WebhookVerifier::new`].
    /// Only returned here.
    pub signing_secret: String,
}

/// A webhook endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub object: String,
    pub id: String,
    pub endpoint: String,
    pub events: Vec<String>,
    pub status: WebhookStatus,
    pub created_at: String,
}

impl HasId for Webhook {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to an endpoint update.
pub type UpdateWebhookResponse = ResourceRef;
/// Response to an endpoint delete.
pub type RemoveWebhookResponse = DeletedResponse;
/// A page of endpoints.
pub type ListWebhooksResponse = ListResponse<Webhook>;
