//! Contacts scoped to an audience: `/audiences/{audience_id}/contacts`.

use super::contacts::*;
use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::ListOptions;

const AUDIENCE_ID_REQUIRED: &str = "Audience ID cannot be empty";

/// Service for audience-scoped contacts.
pub struct AudienceContactsService<'a> {
    client: &'a ResendClient,
}

impl<'a> AudienceContactsService<'a> {
    /// Creates a new audience contacts service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a contact in `request.audience_id`.
    pub async fn create(&self, request: &CreateContactRequest) -> ResendResult<CreateContactResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a contact in `request.audience_id`.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateContactRequest,
    ) -> ResendResult<CreateContactResponse> {
        require(&request.audience_id, AUDIENCE_ID_REQUIRED)?;
        self.client
            .post(ctx, &format!("/audiences/{}/contacts", segment(&request.audience_id)?), request)
            .await
    }

    /// Gets a contact by id or email.
    pub async fn get(&self, audience_id: &str, id_or_email: &str) -> ResendResult<Contact> {
        self.get_with_context(&RequestContext::background(), audience_id, id_or_email)
            .await
    }

    /// Gets a contact by id or email.
    pub async fn get_with_context(
        &self,
        ctx: &RequestContext,
        audience_id: &str,
        id_or_email: &str,
    ) -> ResendResult<Contact> {
        require(audience_id, AUDIENCE_ID_REQUIRED)?;
        require(id_or_email, "Contact ID or email cannot be empty")?;
        self.client
            .get(ctx, &contact_path(audience_id, id_or_email)?)
            .await
    }

    /// Lists the contacts of an audience.
    pub async fn list(&self, audience_id: &str, options: &ListOptions) -> ResendResult<ListContactsResponse> {
        self.list_with_context(&RequestContext::background(), audience_id, options)
            .await
    }

    /// Lists the contacts of an audience.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        audience_id: &str,
        options: &ListOptions,
    ) -> ResendResult<ListContactsResponse> {
        require(audience_id, AUDIENCE_ID_REQUIRED)?;
        let path = options.apply(&format!("/audiences/{}/contacts", segment(audience_id)?))?;
        self.client.get(ctx, &path).await
    }

    /// Updates the contact `request.id` in `request.audience_id`.
    pub async fn update(&self, request: &UpdateContactRequest) -> ResendResult<UpdateContactResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates the contact `request.id` in `request.audience_id`.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateContactRequest,
    ) -> ResendResult<UpdateContactResponse> {
        require(&request.audience_id, AUDIENCE_ID_REQUIRED)?;
        require(&request.id, "Contact ID cannot be empty")?;
        self.client
            .patch(ctx, &contact_path(&request.audience_id, &request.id)?, request)
            .await
    }

    /// Deletes a contact by id or email.
    pub async fn remove(&self, audience_id: &str, id_or_email: &str) -> ResendResult<RemoveContactResponse> {
        self.remove_with_context(&RequestContext::background(), audience_id, id_or_email)
            .await
    }

    /// Deletes a contact by id or email.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        audience_id: &str,
        id_or_email: &str,
    ) -> ResendResult<RemoveContactResponse> {
        require(audience_id, AUDIENCE_ID_REQUIRED)?;
        require(id_or_email, "Contact ID or email cannot be empty")?;
        self.client
            .delete(ctx, &contact_path(audience_id, id_or_email)?)
            .await
    }
}

fn contact_path(audience_id: &str, id_or_email: &str) -> ResendResult<String> {
    Ok(format!(
        "/audiences/{}/contacts/{}",
        segment(audience_id)?,
        segment(id_or_email)?
    ))
}
