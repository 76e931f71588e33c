//! # Resend Integration Library
//!
//! A typed async client for the Resend transactional email API:
//! - Single, scheduled and batch email sending with idempotency keys
//! - Domains, API keys, templates, broadcasts and topics
//! - Contacts, contact properties, segments and topic subscriptions
//! - Cursor pagination
//! - Cancellation and deadlines per call via [`RequestContext`]
//! - Webhook signature verification
//! - A pluggable HTTP transport for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_resend::services::SendEmailRequest;
//! use integrations_resend::ResendClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ResendClient::new("re_123456789")?;
//!
//!     let request = SendEmailRequest {
//!         from: "Acme <onboarding@resend.dev>".to_string(),
//!         to: vec!["delivered@resend.dev".to_string()],
//!         subject: "hello world".to_string(),
//!         html: Some("<p>it works!</p>".to_string()),
//!         ..Default::default()
//!     };
//!     let sent = client.emails().send(&request).await?;
//!     println!("{}", sent.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate limits
//!
//! Every rate-limit class error compares equal to [`ERR_RATE_LIMIT`]:
//!
//! ```rust,no_run
//! # use integrations_resend::{ResendClient, ERR_RATE_LIMIT};
//! # async fn example(client: ResendClient) {
//! if let Err(err) = client.domains().list().await {
//!     if err == ERR_RATE_LIMIT {
//!         let retry_after = err.rate_limit().and_then(|r| r.retry_after_duration());
//!         println!("retry after {:?}", retry_after);
//!     }
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// HTTP client and transport
pub mod client;
pub mod context;
pub mod transport;

// Pagination handling
pub mod pagination;

// API Services
pub mod services;

// Webhooks
pub mod webhooks;

// Mocks for testing
pub mod mocks;

// Re-exports for convenience
pub use auth::ApiKey;
pub use client::{ResendClient, ResendClientBuilder};
pub use config::{ResendConfig, ResendConfigBuilder};
pub use context::RequestContext;
pub use errors::{is_rate_limit_error, ResendError, ResendErrorKind, ResendResult, ERR_RATE_LIMIT};
pub use pagination::{HasId, ListOptions, ListResponse};
pub use webhooks::{WebhookHeaders, WebhookVerifier};
pub use types::*;
