//! Inbound (received) email operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::pagination::{HasId, ListOptions, ListResponse};
use crate::types::StringOrVec;
use serde::{Deserialize, Serialize};

/// Service for emails received on inbound domains.
pub struct ReceivedEmailsService<'a> {
    client: &'a ResendClient,
}

impl<'a> ReceivedEmailsService<'a> {
    /// Creates a new received emails service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Lists received emails.
    pub async fn list(&self, options: &ListOptions) -> ResendResult<ListReceivedEmailsResponse> {
        self.list_with_context(&RequestContext::background(), options)
            .await
    }

    /// Lists received emails.
    pub async fn list_with_context(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> ResendResult<ListReceivedEmailsResponse> {
        self.client
            .get(ctx, &options.apply("/emails/receiving")?)
            .await
    }

    /// Gets a received email.
    pub async fn get(&self, email_id: &str) -> ResendResult<ReceivedEmail> {
        self.get_with_context(&RequestContext::background(), email_id)
            .await
    }

    /// Gets a received email.
    pub async fn get_with_context(
        &self,
        ctx: &RequestContext,
        email_id: &str,
    ) -> ResendResult<ReceivedEmail> {
        require(email_id, "Email ID cannot be empty")?;
        self.client
            .get(ctx, &format!("/emails/receiving/{}", segment(email_id)?))
            .await
    }

    /// Lists the attachments of a received email.
    pub async fn list_attachments(
        &self,
        email_id: &str,
        options: &ListOptions,
    ) -> ResendResult<ListReceivedAttachmentsResponse> {
        self.list_attachments_with_context(&RequestContext::background(), email_id, options)
            .await
    }

    /// Lists the attachments of a received email.
    pub async fn list_attachments_with_context(
        &self,
        ctx: &RequestContext,
        email_id: &str,
        options: &ListOptions,
    ) -> ResendResult<ListReceivedAttachmentsResponse> {
        require(email_id, "Email ID cannot be empty")?;
        let path = options.apply(&format!("/emails/receiving/{}/attachments", segment(email_id)?))?;
        self.client.get(ctx, &path).await
    }

    /// Gets a single attachment, including a temporary download URL.
    pub async fn get_attachment(
        &self,
        email_id: &str,
        attachment_id: &str,
    ) -> ResendResult<ReceivedAttachment> {
        self.get_attachment_with_context(&RequestContext::background(), email_id, attachment_id)
            .await
    }

    /// Gets a single attachment, including a temporary download URL.
    pub async fn get_attachment_with_context(
        &self,
        ctx: &RequestContext,
        email_id: &str,
        attachment_id: &str,
    ) -> ResendResult<ReceivedAttachment> {
        require(email_id, "Email ID cannot be empty")?;
        require(attachment_id, "Attachment ID cannot be empty")?;
        let path = format!(
            "/emails/receiving/{}/attachments/{}",
            segment(email_id)?,
            segment(attachment_id)?
        );
        self.client.get(ctx, &path).await
    }
}

/// An email received on an inbound domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedEmail {
    pub object: String,
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub created_at: String,
    pub html: Option<String>,
    pub text: Option<String>,
    pub bcc: Option<Vec<String>>,
    pub cc: Option<Vec<String>>,
    pub reply_to: Option<StringOrVec>,
    /// `Message-ID` header of the inbound message.
    pub message_id: Option<String>,
    pub attachments: Vec<ReceivedAttachment>,
}

impl HasId for ReceivedEmail {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Attachment metadata of a received email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedAttachment {
    pub object: String,
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub content_disposition: Option<String>,
    pub content_id: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// Temporary URL the file can be downloaded from.
    pub download_url: Option<String>,
    /// Expiry of `download_url`.
    pub expires_at: Option<String>,
}

impl HasId for ReceivedAttachment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of received emails.
pub type ListReceivedEmailsResponse = ListResponse<ReceivedEmail>;

/// A page of received attachments.
pub type ListReceivedAttachmentsResponse = ListResponse<ReceivedAttachment>;
