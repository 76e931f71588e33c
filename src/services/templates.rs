//! Template operations.
//!
//! Templates are addressed by id or alias. Declared variables are checked
//! against the HTML by the server, not here.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef, StringOrVec};
use serde::{Deserialize, Serialize};

const TEMPLATE_ID_REQUIRED: &str = "Template ID or alias cannot be empty";

/// Service for template operations.
pub struct TemplatesService<'a> {
    client: &'a ResendClient,
}

impl<'a> TemplatesService<'a> {
    /// Creates a new templates service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a draft template.
    pub async fn create(&self, request: &CreateTemplateRequest) -> ResendResult<CreateTemplateResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a draft template.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateTemplateRequest,
    ) -> ResendResult<CreateTemplateResponse> {
        require(&request.name, "Name cannot be empty")?;
        require(&request.html, "HTML cannot be empty")?;
        self.client.post(ctx, "/templates", request).await
    }

    /// Gets a template by id or alias.
    pub async fn get(&self, id_or_alias: &str) -> ResendResult<Template> {
        self.get_with_context(&RequestContext::background(), id_or_alias)
            .await
    }

    /// Gets a template by id or alias.
    pub async fn get_with_context(&self, ctx: &RequestContext, id_or_alias: &str) -> ResendResult<Template> {
        require(id_or_alias, TEMPLATE_ID_REQUIRED)?;
        self.client
            .get(ctx, &format!("/templates/{}", segment(id_or_alias)?))
            .await
    }

    /// Lists templates.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListTemplatesResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists templates.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListTemplatesResponse> {
        self.client.get(ctx, &options.apply("/templates")?).await
    }

    /// Updates a template.
    pub async fn update(&self, request: &UpdateTemplateRequest) -> ResendResult<UpdateTemplateResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Updates a template.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateTemplateRequest,
    ) -> ResendResult<UpdateTemplateResponse> {
        require(&request.id_or_alias, TEMPLATE_ID_REQUIRED)?;
        self.client
            .patch(ctx, &format!("/templates/{}", segment(&request.id_or_alias)?), request)
            .await
    }

    /// Publishes a template so it can be used for sending.
    pub async fn publish(&self, id_or_alias: &str) -> ResendResult<PublishTemplateResponse> {
        self.publish_with_context(&RequestContext::background(), id_or_alias)
            .await
    }

    /// Publishes a template so it can be used for sending.
    pub async fn publish_with_context(
        &self,
        ctx: &RequestContext,
        id_or_alias: &str,
    ) -> ResendResult<PublishTemplateResponse> {
        require(id_or_alias, TEMPLATE_ID_REQUIRED)?;
        self.client
            .post_empty(ctx, &format!("/templates/{}/publish", segment(id_or_alias)?))
            .await
    }

    /// Copies a template into a new draft.
    pub async fn duplicate(&self, id_or_alias: &str) -> ResendResult<DuplicateTemplateResponse> {
        self.duplicate_with_context(&RequestContext::background(), id_or_alias)
            .await
    }

    /// Copies a template into a new draft.
    pub async fn duplicate_with_context(
        &self,
        ctx: &RequestContext,
        id_or_alias: &str,
    ) -> ResendResult<DuplicateTemplateResponse> {
        require(id_or_alias, TEMPLATE_ID_REQUIRED)?;
        self.client
            .post_empty(ctx, &format!("/templates/{}/duplicate", segment(id_or_alias)?))
            .await
    }

    /// Deletes a template.
    pub async fn remove(&self, id_or_alias: &str) -> ResendResult<RemoveTemplateResponse> {
        self.remove_with_context(&RequestContext::background(), id_or_alias)
            .await
    }

    /// Deletes a template.
    pub async fn remove_with_context(
        &self,
        ctx: &RequestContext,
        id_or_alias: &str,
    ) -> ResendResult<RemoveTemplateResponse> {
        require(id_or_alias, TEMPLATE_ID_REQUIRED)?;
        self.client
            .delete(ctx, &format!("/templates/{}", segment(id_or_alias)?))
            .await
    }
}

/// Type of a template variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariableType {
    /// Text value.
    #[default]
    String,
    /// Numeric value.
    Number,
}

/// A variable declared by a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Key referenced as `{{{KEY}}}` in the HTML.
    pub key: String,
    #[serde(rename = "type")]
    pub variable_type: TemplateVariableType,
    /// Value used when a send omits the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<serde_json::Value>,
}

impl TemplateVariable {
    /// Declares a variable.
    pub fn new(key: impl Into<String>, variable_type: TemplateVariableType) -> Self {
        Self {
            key: key.into(),
            variable_type,
            fallback_value: None,
        }
    }

    /// Sets the fallback value.
    pub fn fallback(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.fallback_value = Some(value.into());
        self
    }
}

/// Request to create a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<StringOrVec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
}

/// Request to update a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTemplateRequest {
    /// Template id or alias.
    #[serde(skip)]
    pub id_or_alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
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
    pub variables: Option<Vec<TemplateVariable>>,
}

/// A template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub object: String,
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
    /// `draft` or `published`.
    pub status: String,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub reply_to: Option<StringOrVec>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub variables: Vec<TemplateVariable>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
}

impl HasId for Template {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Response to a template create.
pub type CreateTemplateResponse = ResourceRef;
/// Response to a template update.
pub type UpdateTemplateResponse = ResourceRef;
/// Response to a template publish.
pub type PublishTemplateResponse = ResourceRef;
/// Response to a template duplicate; `id` is the copy.
pub type DuplicateTemplateResponse = ResourceRef;
/// Response to a template delete.
pub type RemoveTemplateResponse = DeletedResponse;
/// A page of templates.
pub type ListTemplatesResponse = ListResponse<Template>;
