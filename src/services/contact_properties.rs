//! Custom contact property definitions.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};
use serde::{Deserialize, Serialize};

const PROPERTY_ID_REQUIRED: &str = "Contact property ID cannot be empty";

/// Service for contact property operations.
pub struct ContactPropertiesService<'a> {
    client: &'a ResendClient,
}

impl<'a> ContactPropertiesService<'a> {
    /// Creates a new contact properties service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Defines a new contact property.
    pub async fn create(
        &self,
        request: &CreateContactPropertyRequest,
    ) -> ResendResult<CreateContactPropertyResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Defines a new contact property.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateContactPropertyRequest,
    ) -> ResendResult<CreateContactPropertyResponse> {
        require(&request.key, "Key cannot be empty")?;
        require(&request.property_type, "Type cannot be empty")?;
        self.client.post(ctx, "/contact-properties", request).await
    }

    /// Gets a contact property.
    pub async fn get(&self, property_id: &str) -> ResendResult<ContactProperty> {
        self.get_with_context(&RequestContext::background(), property_id)
            .await
    }

    /// Gets a contact property.
    pub async fn get_with_context(
        &self,
        ctx: &RequestContext,
        property_id: &str,
    ) -> ResendResult<ContactProperty> {
        require(property_id, PROPERTY_ID_REQUIRED)?;
        self.client
            .get(ctx, &format!("/contact-properties/{}", segment(property_id)?))
            .await
    }

    /// Lists contact properties.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListContactPropertiesResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists contact properties.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListContactPropertiesResponse> {
        self.client
            .get(ctx, &options.apply("/contact-properties")?)
            .await
    }

    /// Updates a contact property. Only the fallback value can change.
    pub async fn update(
        &self,
        request: &UpdateContactPropertyRequest,
    ) -> ResendResult<UpdateContactPropertyResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates a contact property. Only the fallback value can change.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateContactPropertyRequest,
    ) -> ResendResult<UpdateContactPropertyResponse> {
        require(&request.id, PROPERTY_ID_REQUIRED)?;
        self.client
            .patch(ctx, &format!("/contact-properties/{}", segment(&request.id)?), request)
            .await
    }

    /// Deletes a contact property.
    pub async fn remove(&self, property_id: &str) -> ResendResult<RemoveContactPropertyResponse> {
        self.remove_with_context(&RequestContext::background(), property_id)
            .await
    }

    /// Deletes a contact property.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        property_id: &str,
    ) -> ResendResult<RemoveContactPropertyResponse> {
        require(property_id, PROPERTY_ID_REQUIRED)?;
        self.client
            .delete(ctx, &format!("/contact-properties/{}", segment(property_id)?))
            .await
    }
}

/// Request to define a contact property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactPropertyRequest {
    /// Property key, referenced in templates as `{{{contact.key}}}`.
    pub key: String,
    /// Value type: `string` or `number`.
    #[serde(rename = "type")]
    pub property_type: String,
    /// Value used for contacts without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<serde_json::Value>,
}

/// Request to update a contact property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateContactPropertyRequest {
    /// Property id.
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<serde_json::Value>,
}

/// A contact property definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactProperty {
    pub object: String,
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub fallback_value: Option<serde_json::Value>,
    pub created_at: String,
}

impl HasId for ContactProperty {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to a contact property create.
pub type CreateContactPropertyResponse = ResourceRef;
/// Response to a contact property update.
pub type UpdateContactPropertyResponse = ResourceRef;
/// Response to a contact property delete.
pub type RemoveContactPropertyResponse = DeletedResponse;
/// A page of contact properties.
pub type ListContactPropertiesResponse = ListResponse<ContactProperty>;
