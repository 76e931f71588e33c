//! Email sending operations.

use super::{require, segment};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::types::{Attachment, ResourceRef, StringOrVec, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header carrying a caller-chosen idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Service for email operations.
pub struct EmailsService<'a> {
    client: &'a ResendClient,
}

impl<'a> EmailsService<'a> {
    /// Creates a new emails service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Sends an email.
    pub async fn send(&self, request: &SendEmailRequest) -> ResendResult<SendEmailResponse> {
        self.send_with_context(&RequestContext::background(), request)
            .await
    }

    /// Sends an email.
    pub async fn send_with_context(
        &self,
        ctx: &RequestContext,
        request: &SendEmailRequest,
    ) -> ResendResult<SendEmailResponse> {
        self.send_with_options_and_context(ctx, request, &SendEmailOptions::default())
            .await
    }

    /// Sends an email with per-request options.
    pub async fn send_with_options(
        &self,
        request: &SendEmailRequest,
        options: &SendEmailOptions,
    ) -> ResendResult<SendEmailResponse> {
        self.send_with_options_and_context(&RequestContext::background(), request, options)
            .await
    }

    /// Sends an email with per-request options.
    pub async fn send_with_options_and_context(
        &self,
        ctx: &RequestContext,
        request: &SendEmailRequest,
        options: &SendEmailOptions,
    ) -> ResendResult<SendEmailResponse> {
        self.client
            .post_with_headers(ctx, "/emails", request, options.headers())
            .await
    }

    /// Gets an email.
    pub async fn get(&self, email_id: &str) -> ResendResult<Email> {
        self.get_with_context(&RequestContext::background(), email_id)
            .await
    }

    /// Gets an email.
    pub async fn get_with_context(&self, ctx: &RequestContext, email_id: &str) -> ResendResult<Email> {
        require(email_id, "Email ID cannot be empty")?;
        self.client.get(ctx, &format!("/emails/{}", segment(email_id)?)).await
    }

    /// Reschedules a scheduled email.
    pub async fn update(&self, request: &UpdateEmailRequest) -> ResendResult<UpdateEmailResponse> {
        self.update_with_context(&RequestContext::background(), request)
            .await
    }

    /// Reschedules a scheduled email.
    pub async fn update_with_context(
        &self,
        ctx: &RequestContext,
        request: &UpdateEmailRequest,
    ) -> ResendResult<UpdateEmailResponse> {
        require(&request.id, "Email ID cannot be empty")?;
        self.client
            .patch(ctx, &format!("/emails/{}", segment(&request.id)?), request)
            .await
    }

    /// Cancels a scheduled email.
    pub async fn cancel(&self, email_id: &str) -> ResendResult<CancelScheduledEmailResponse> {
        self.cancel_with_context(&RequestContext::background(), email_id)
            .await
    }

    /// Cancels a scheduled email.
    pub async fn cancel_with_context(
        &self,
        ctx: &RequestContext,
        email_id: &str,
    ) -> ResendResult<CancelScheduledEmailResponse> {
        require(email_id, "Email ID cannot be empty")?;
        self.client
            .post_empty(ctx, &format!("/emails/{}/cancel", segment(email_id)?))
            .await
    }
}

/// Template reference used instead of inline `html`/`text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Template id or alias.
    pub id: String,
    /// Values for the template's declared variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, serde_json::Value>>,
}

/// Request to send an email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender address, e.g. `Acme <onboarding@acme.dev>`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Recipient addresses.
    #[serde(default)]
    pub to: Vec<String>,
    /// Subject line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Bcc recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    /// Cc recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    /// Reply-to address or addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<StringOrVec>,
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Template to render instead of `html`/`text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<EmailTemplate>,
    /// Custom tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Custom email headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// ISO-8601 time or natural language ("in 1 min") to schedule the send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// Per-request options for [`EmailsService::send_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendEmailOptions {
    /// Idempotency key; repeated sends with the same key are deduplicated.
    pub idempotency_key: Option<String>,
}

impl SendEmailOptions {
    pub(crate) fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(key) = self.idempotency_key.as_deref().filter(|k| !k.is_empty()) {
            headers.insert(IDEMPOTENCY_KEY_HEADER.to_string(), key.to_string());
        }
        headers
    }
}

/// Response to a send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    /// Email id.
    #[serde(default)]
    pub id: String,
}

/// A sent email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
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
    /// Latest delivery event, e.g. `delivered` or `bounced`.
    pub last_event: Option<String>,
    pub scheduled_at: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

/// Request to reschedule an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    /// Email id.
    #[serde(skip)]
    pub id: String,
    /// New send time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// Response to an update.
pub type UpdateEmailResponse = ResourceRef;

/// Response to a cancel.
pub type CancelScheduledEmailResponse = ResourceRef;
