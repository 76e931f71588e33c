//! Global contact operations.
//!
//! Contacts are addressed by id or by email address. Segment membership and
//! topic subscriptions hang off [`ContactsService::segments`] and
//! [`ContactsService::topics`].

use super::contact_segments::ContactSegmentsService;
use super::contact_topics::ContactTopicsService;
use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::{ResendError, ResendResult};
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for contacts that are not scoped to an audience.
pub struct ContactsService<'a> {
    client: &'a ResendClient,
}

impl<'a> ContactsService<'a> {
    /// Creates a new contacts service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Segment membership of contacts.
    pub fn segments(&self) -> ContactSegmentsService<'a> {
        ContactSegmentsService::new(self.client)
    }

    /// Topic subscriptions of contacts.
    pub fn topics(&self) -> ContactTopicsService<'a> {
        ContactTopicsService::new(self.client)
    }

    /// Creates a contact. `audience_id` is ignored.
    pub async fn create(&self, request: &CreateContactRequest) -> ResendResult<CreateContactResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a contact. `audience_id` is ignored.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateContactRequest,
    ) -> ResendResult<CreateContactResponse> {
        self.client.post(ctx, "/contacts", request).await
    }

    /// Gets a contact by id or email.
    pub async fn get(&self, id_or_email: &str) -> ResendResult<Contact> {
        self.get_with_context(&RequestContext::background(), id_or_email)
            .await
    }

    /// Gets a contact by id or email.
    pub async fn get_with_context(&self, ctx: &RequestContext, id_or_email: &str) -> ResendResult<Contact> {
        require(id_or_email, "Contact ID or email cannot be empty")?;
        self.client.get(ctx, &format!("/contacts/{}", segment(id_or_email)?)).await
    }

    /// Lists contacts.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListContactsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists contacts.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListContactsResponse> {
        self.client.get(ctx, &options.apply("/contacts")?).await
    }

    /// Updates a contact addressed by `request.id`, or by `request.email` when no id is set.
    pub async fn update(&self, request: &UpdateContactRequest) -> ResendResult<UpdateContactResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates a contact addressed by `request.id`, or by `request.email` when no id is set.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateContactRequest,
    ) -> ResendResult<UpdateContactResponse> {
        let key = request.key()?;
        self.client
            .patch(ctx, &format!("/contacts/{}", segment(key)?), request)
            .await
    }

    /// Deletes a contact by id or email.
    pub async fn remove(&self, id_or_email: &str) -> ResendResult<RemoveContactResponse> {
        self.remove_with_context(&RequestContext::background(), id_or_email)
            .await
    }

    /// Deletes a contact by id or email.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        id_or_email: &str,
    ) -> ResendResult<RemoveContactResponse> {
        require(id_or_email, "Contact ID or email cannot be empty")?;
        self.client
            .delete(ctx, &format!("/contacts/{}", segment(id_or_email)?))
            .await
    }
}

/// Request to create a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactRequest {
    /// Owning audience (audience-scoped surface only).
    #[serde(skip)]
    pub audience_id: String,
    /// Contact email.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Global unsubscribe flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
    /// Values for custom contact properties, keyed by property key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Request to update a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    /// Owning audience (audience-scoped surface only).
    #[serde(skip)]
    pub audience_id: String,
    /// Contact id.
    #[serde(skip)]
    pub id: String,
    /// Contact email; addresses the contact when `id` is empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl UpdateContactRequest {
    /// The path segment identifying the contact.
    pub(crate) fn key(&self) -> ResendResult<&str> {
        if !self.id.trim().is_empty() {
            Ok(&self.id)
        } else if !self.email.trim().is_empty() {
            Ok(&self.email)
        } else {
            Err(ResendError::validation("Contact ID or email must be provided"))
        }
    }
}

/// A contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub object: String,
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
    pub unsubscribed: bool,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl HasId for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to a contact create.
pub type CreateContactResponse = ResourceRef;
/// Response to a contact update.
pub type UpdateContactResponse = ResourceRef;
/// Response to a contact delete.
pub type RemoveContactResponse = DeletedResponse;
/// A page of contacts.
pub type ListContactsResponse = ListResponse<Contact>;
