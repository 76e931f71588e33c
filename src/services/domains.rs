//! Sending domain operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::{DeletedResponse, ResourceRef};
use serde::{Deserialize, Serialize};

/// Service for domain operations.
pub struct DomainsService<'a> {
    client: &'a ResendClient,
}

impl<'a> DomainsService<'a> {
    /// Creates a new domains service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Creates a domain.
    pub async fn create(&self, request: &CreateDomainRequest) -> ResendResult<CreateDomainResponse> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Creates a domain.
    pub async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: &CreateDomainRequest,
    ) -> ResendResult<CreateDomainResponse> {
        require(&request.name, "Domain name cannot be empty")?;
        self.client.post(ctx, "/domains", request).await
    }

    /// Gets a domain with its DNS records.
    pub async fn get(&self, domain_id: &str) -> ResendResult<Domain> {
        self.get_with_context(&RequestContext::background(), domain_id)
            .await
    }

    /// Gets a domain with its DNS records.
    pub async fn get_with_context(&self, ctx: &RequestContext, domain_id: &str) -> ResendResult<Domain> {
        require(domain_id, "Domain ID cannot be empty")?;
        self.client.get(ctx, &format!("/domains/{}", segment(domain_id)?)).await
    }

    /// Lists domains.
    pub async fn list(&self) -> ResendResult<ListDomainsResponse> {
        self.list_with_options(&ListOptions::default()).await
    }

    /// Lists domains with pagination.
    pub async fn list_with_options(&self, options: &ListOptions) -> ResendResult<ListDomainsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists domains with pagination.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListDomainsResponse> {
        self.client.get(ctx, &options.apply("/domains")?).await
    }

    /// Starts DNS verification of a domain.
    pub async fn verify(&self, domain_id: &str) -> ResendResult<VerifyDomainResponse> {
        self.verify_with_context(&RequestContext::background(), domain_id)
            .await
    }

    /// Starts DNS verification of a domain.
    pub async fn verify_with_context(
        &self,
        ctx: &RequestContext,
        domain_id: &str,
    ) -> ResendResult<VerifyDomainResponse> {
        require(domain_id, "Domain ID cannot be empty")?;
        self.client
            .post_empty(ctx, &format!("/domains/{}/verify", segment(domain_id)?))
            .await
    }

    /// Deletes a domain. Returns true once the API confirms the deletion.
    pub async fn remove(&self, domain_id: &str) -> ResendResult<bool> {
        self.remove_with_context(&RequestContext::background(), domain_id)
            .await
    }

    /// Deletes a domain. Returns true once the API confirms the deletion.
    pub async fn remove_with_context(&self, ctx: &RequestContext, domain_id: &str) -> ResendResult<bool> {
        require(domain_id, "Domain ID cannot be empty")?;
        let response: Option<DeletedResponse> = self
            .client
            .delete(ctx, &format!("/domains/{}", segment(domain_id)?))
            .await?;
        Ok(response.map_or(true, |r| r.deleted))
    }
}

/// Request to add a sending domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    /// Domain name, e.g. `example.com`.
    pub name: String,
    /// Sending region (`us-east-1`, `eu-west-1`, `sa-east-1`, `ap-northeast-1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Subdomain used for the Return-Path address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_return_path: Option<String>,
}

/// A DNS record the domain owner must publish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRecord {
    /// Record purpose, e.g. `SPF` or `DKIM`.
    pub record: String,
    pub name: String,
    /// DNS record type, e.g. `MX` or `TXT`.
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: String,
    pub status: String,
    pub value: String,
    pub priority: Option<u32>,
}

/// Response to a domain create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDomainResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub status: String,
    pub records: Vec<DomainRecord>,
    pub region: String,
}

/// A sending domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub object: String,
    pub id: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub region: String,
    /// Only present on `get`.
    pub records: Option<Vec<DomainRecord>>,
}

impl HasId for Domain {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of domains.
pub type ListDomainsResponse = ListResponse<Domain>;

/// Response to a verify call.
pub type VerifyDomainResponse = ResourceRef;
