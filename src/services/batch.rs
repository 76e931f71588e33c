//! Batch email sending.

use super::emails::{SendEmailRequest, SendEmailResponse, IDEMPOTENCY_KEY_HEADER};
use crate::client::ResendClient;
use crate::context::RequestContext;
use crate::errors::ResendResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Header selecting how the API validates a batch.
pub const BATCH_VALIDATION_HEADER: &str = "x-batch-validation";

/// Service for sending up to 100 emails in one call.
pub struct BatchService<'a> {
    client: &'a ResendClient,
}

impl<'a> BatchService<'a> {
    /// Creates a new batch service.
    pub fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Sends a batch of emails.
    pub async fn send(&self, emails: &[SendEmailRequest]) -> ResendResult<BatchEmailResponse> {
        self.send_with_context(&RequestContext::background(), emails)
            .await
    }

    /// Sends a batch of emails.
    pub async fn send_with_context(
        &self,
        ctx: &RequestContext,
        emails: &[SendEmailRequest],
    ) -> ResendResult<BatchEmailResponse> {
        self.send_with_options_and_context(ctx, emails, &BatchSendOptions::default())
            .await
    }

    /// Sends a batch of emails with per-request options.
    pub async fn send_with_options(
        &self,
        emails: &[SendEmailRequest],
        options: &BatchSendOptions,
    ) -> ResendResult<BatchEmailResponse> {
        self.send_with_options_and_context(&RequestContext::background(), emails, options)
            .await
    }

    /// Sends a batch of emails with per-request options.
    pub async fn send_with_options_and_context(
        &self,
        ctx: &RequestContext,
        emails: &[SendEmailRequest],
        options: &BatchSendOptions,
    ) -> ResendResult<BatchEmailResponse> {
        self.client
            .post_with_headers(ctx, "/emails/batch", emails, options.headers())
            .await
    }
}

/// How the API treats invalid emails in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchValidation {
    /// Reject the whole batch if any email is invalid.
    Strict,
    /// Send the valid emails and report the rest in `errors`.
    Permissive,
}

impl BatchValidation {
    /// Header value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for BatchValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request options for batch sends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSendOptions {
    /// Idempotency key for the whole batch.
    pub idempotency_key: Option<String>,
    /// Validation mode; the API default is strict.
    pub validation: Option<BatchValidation>,
}

impl BatchSendOptions {
    fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(key) = self.idempotency_key.as_deref().filter(|k| !k.is_empty()) {
            headers.insert(IDEMPOTENCY_KEY_HEADER.to_string(), key.to_string());
        }
        if let Some(validation) = self.validation {
            headers.insert(BATCH_VALIDATION_HEADER.to_string(), validation.to_string());
        }
        headers
    }
}

/// An email rejected in permissive mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    /// Position of the email in the submitted batch.
    #[serde(default)]
    pub index: usize,
    /// Reason for rejection.
    #[serde(default)]
    pub message: String,
}

/// Response to a batch send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEmailResponse {
    /// Ids of the accepted emails, in submission order.
    #[serde(default)]
    pub data: Vec<SendEmailResponse>,
    /// Rejected emails (permissive mode only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BatchError>>,
}
