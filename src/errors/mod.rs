//! Error types for the Resend client.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for Resend operations.
pub type ResendResult<T> = Result<T, ResendError>;

/// Error kinds for classifying Resend errors.
///
/// A [`ResendError`] compares equal to its kind, which lets callers test a
/// whole class of failures with a single predicate:
///
/// ```
/// use integrations_resend::errors::{ResendError, RateLimitError, ERR_RATE_LIMIT};
///
/// let err = ResendError::RateLimit(RateLimitError::new("Too many requests"));
/// assert!(err == ERR_RATE_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResendErrorKind {
    /// A required argument was missing before any request was issued.
    Validation,
    /// The client configuration is invalid.
    Configuration,
    /// The request could not be built (URL resolution or body encoding).
    RequestBuild,
    /// The HTTP stack failed (network, DNS, timeout, cancellation).
    Transport,
    /// The API rejected the request as invalid (400/422).
    InvalidRequest,
    /// The API returned a non-2xx status without rate-limit semantics.
    Api,
    /// The API signalled a rate limit.
    RateLimit,
    /// A successful response body could not be decoded.
    Decode,
    /// A webhook timestamp was outside the tolerance window.
    WebhookTimestamp,
    /// No webhook signature matched.
    WebhookSignature,
    /// Webhook headers or secret were malformed.
    WebhookFormat,
}

impl fmt::Display for ResendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation_error"),
            Self::Configuration => write!(f, "configuration_error"),
            Self::RequestBuild => write!(f, "request_build_error"),
            Self::Transport => write!(f, "transport_error"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Api => write!(f, "api_error"),
            Self::RateLimit => write!(f, "rate_limit_exceeded"),
            Self::Decode => write!(f, "decode_error"),
            Self::WebhookTimestamp => write!(f, "webhook_timestamp_error"),
            Self::WebhookSignature => write!(f, "webhook_signature_error"),
            Self::WebhookFormat => write!(f, "webhook_format_error"),
        }
    }
}

/// Sentinel for rate-limit errors.
pub const ERR_RATE_LIMIT: ResendErrorKind = ResendErrorKind::RateLimit;

/// Message used when an error response carries no message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Rate limit details extracted from response headers.
///
/// Header values are kept verbatim; use the helper accessors for parsed
/// durations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitError {
    /// Human readable message.
    pub message: String,
    /// Status of the response that signalled the limit. Usually 429, but a
    /// rate-limit message can arrive with any error status.
    pub status: Option<u16>,
    /// Raw `ratelimit-limit` header.
    pub limit: Option<String>,
    /// Raw `ratelimit-remaining` header.
    pub remaining: Option<String>,
    /// Raw `ratelimit-reset` header (seconds).
    pub reset: Option<String>,
    /// Raw `retry-after` header (seconds).
    pub retry_after: Option<String>,
}

impl RateLimitError {
    /// Creates a rate limit error with no header data.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Parses `retry-after` as whole seconds.
    pub fn retry_after_duration(&self) -> Option<Duration> {
        parse_seconds(self.retry_after.as_deref())
    }

    /// Parses `ratelimit-reset` as whole seconds.
    pub fn reset_duration(&self) -> Option<Duration> {
        parse_seconds(self.reset.as_deref())
    }
}

fn parse_seconds(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref retry_after) = self.retry_after {
            write!(f, " (retry after {}s)", retry_after)?;
        }
        Ok(())
    }
}

impl std::error::Error for RateLimitError {}

/// Resend client error.
#[derive(Error, Debug)]
pub enum ResendError {
    /// A required field was empty.
    #[error("[validation_error] {0}")]
    Validation(String),

    /// The client configuration is invalid.
    #[error("[configuration_error] {0}")]
    Configuration(String),

    /// The request could not be built.
    #[error("[request_build_error] {0}")]
    RequestBuild(String),

    /// The HTTP stack reported a failure.
    #[error("[transport_error] {0}")]
    Transport(#[from] TransportError),

    /// The API rejected the request (400/422).
    #[error("[invalid_request] {message} (HTTP {status})")]
    InvalidRequest {
        /// HTTP status code.
        status: u16,
        /// Error name reported by the API.
        name: Option<String>,
        /// Error message reported by the API.
        message: String,
    },

    /// Generic API failure.
    #[error("[api_error] {message} (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error name reported by the API.
        name: Option<String>,
        /// Error message reported by the API, or "Unknown Error".
        message: String,
    },

    /// The API signalled a rate limit.
    #[error("[rate_limit_exceeded] {0}")]
    RateLimit(RateLimitError),

    /// A successful response could not be decoded.
    #[error("[decode_error] {0}")]
    Decode(String),

    /// Webhook timestamp outside the tolerance window.
    #[error("[webhook_timestamp_error] {0}")]
    WebhookTimestamp(String),

    /// No webhook signature matched.
    #[error("[webhook_signature_error] {0}")]
    WebhookSignature(String),

    /// Malformed webhook headers or secret.
    #[error("[webhook_format_error] {0}")]
    WebhookFormat(String),
}

impl ResendError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a request build error.
    pub fn request_build(message: impl Into<String>) -> Self {
        Self::RequestBuild(message.into())
    }

    /// Gets the error kind.
    pub fn kind(&self) -> ResendErrorKind {
        match self {
            Self::Validation(_) => ResendErrorKind::Validation,
            Self::Configuration(_) => ResendErrorKind::Configuration,
            Self::RequestBuild(_) => ResendErrorKind::RequestBuild,
            Self::Transport(_) => ResendErrorKind::Transport,
            Self::InvalidRequest { .. } => ResendErrorKind::InvalidRequest,
            Self::Api { .. } => ResendErrorKind::Api,
            Self::RateLimit(_) => ResendErrorKind::RateLimit,
            Self::Decode(_) => ResendErrorKind::Decode,
            Self::WebhookTimestamp(_) => ResendErrorKind::WebhookTimestamp,
            Self::WebhookSignature(_) => ResendErrorKind::WebhookSignature,
            Self::WebhookFormat(_) => ResendErrorKind::WebhookFormat,
        }
    }

    /// Gets the HTTP status code, for errors produced from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::RateLimit(info) => info.status,
            _ => None,
        }
    }

    /// Gets the rate limit details.
    pub fn rate_limit(&self) -> Option<&RateLimitError> {
        match self {
            Self::RateLimit(info) => Some(info),
            _ => None,
        }
    }

    /// Gets the human readable message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(m)
            | Self::Configuration(m)
            | Self::RequestBuild(m)
            | Self::Decode(m)
            | Self::WebhookTimestamp(m)
            | Self::WebhookSignature(m)
            | Self::WebhookFormat(m) => m.clone(),
            Self::Transport(e) => e.to_string(),
            Self::InvalidRequest { message, .. } | Self::Api { message, .. } => message.clone(),
            Self::RateLimit(info) => info.message.clone(),
        }
    }
}

impl PartialEq<ResendErrorKind> for ResendError {
    fn eq(&self, other: &ResendErrorKind) -> bool {
        self.kind() == *other
    }
}

impl PartialEq<ResendError> for ResendErrorKind {
    fn eq(&self, other: &ResendError) -> bool {
        *self == other.kind()
    }
}

impl From<RateLimitError> for ResendError {
    fn from(info: RateLimitError) -> Self {
        Self::RateLimit(info)
    }
}

/// Checks if an error is a rate limit error.
pub fn is_rate_limit_error(error: &ResendError) -> bool {
    *error == ERR_RATE_LIMIT
}
