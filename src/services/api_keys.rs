//! API key operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::DeletedResponse;
use serde::{Deserialize, Serialize};

/// Service for API key operations.
pub struct ApiKeysService<'a> {
    client: &'a ResendClient,
}

impl<'a> ApiKeysService<'a> {
    /// Creates a new API keys service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates an API key. The token is only returned by this call.
    pub async fn create(&self, request: &CreateApiKeyRequest) -> ResendResult<CreateApiKeyResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates an API key. The token is only returned by this call.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateApiKeyRequest,
    ) -> ResendResult<CreateApiKeyResponse> {
        require(&request.name, "API key name cannot be empty")?;
        self.client.post(ctx, "/api-keys", request).await
    }

    /// Lists API keys.
    pub async fn list(&self) -> ResendResult<ListApiKeysResponse> {
        self.list_with_options(&ListOptions::default()).await
    }

    /// Lists API keys with pagination.
    pub async fn list_with_options(&self, options: &ListOptions) -> ResendResult<ListApiKeysResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists API keys with pagination.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListApiKeysResponse> {
        self.client.get(ctx, &options.apply("/api-keys")?).await
    }

    /// Deletes an API key. Returns true once the API confirms the deletion.
    pub async fn remove(&self, api_key_id: &str) -> ResendResult<bool> {
        self.remove_with_context(&RequestContext::background(), api_key_id)
            .await
    }

    /// Deletes an API key. Returns true once the API confirms the deletion.
    pub async fn remove_with_context(&self, ctx: &RequestContext, api_key_id: &str) -> ResendResult<bool> {
        require(api_key_id, "API key ID cannot be empty")?;
        let response: Option<DeletedResponse> = self
            .client
            .delete(ctx, &format!("/api-keys/{}", segment(api_key_id)?))
            .await?;
        Ok(response.map_or(true, |r| r.deleted))
    }
}

/// Access level of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyPermission {
    /// Create, delete, get and update any resource.
    FullAccess,
    /// Send emails only.
    SendingAccess,
}

/// Request to create an API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    /// Key name.
    pub name: String,
    /// Access level; full access when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<ApiKeyPermission>,
    /// Restricts a sending key to one domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

/// Response to an API key create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateApiKeyResponse {
    /// Key id.
    pub id: String,
    /// The secret token, `re_...`.
    pub token: String,
}

/// An API key as listed (never includes the token).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyInfo {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl HasId for ApiKeyInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of API keys.
pub type ListApiKeysResponse = ListResponse<ApiKeyInfo>;
