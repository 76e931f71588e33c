//! HTTP response parser for the Resend API.
//!
//! Maps status codes to the error taxonomy, extracts rate limit headers and
//! decodes successful JSON bodies.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::http::HttpResponse;
use crate::errors::{RateLimitError, ResendError, ResendResult, UNKNOWN_ERROR_MESSAGE};

/// Rate limit header names.
pub const HEADER_RATELIMIT_LIMIT: &str = "ratelimit-limit";
/// Remaining requests in the current window.
pub const HEADER_RATELIMIT_REMAINING: &str = "ratelimit-remaining";
/// Seconds until the window resets.
pub const HEADER_RATELIMIT_RESET: &str = "ratelimit-reset";
/// Seconds to wait before retrying.
pub const HEADER_RETRY_AFTER: &str = "retry-after";

const DEFAULT_RATE_LIMIT_MESSAGE: &str = "Too many requests";

/// Error body returned by the API.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "statusCode", default)]
    status_code: Option<u16>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Parser for HTTP responses from the Resend API.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a response into the expected type.
    ///
    /// Returns `Ok(None)` for `204 No Content` and for successful responses
    /// with an empty body.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> ResendResult<Option<T>> {
        Self::check_status(&response)?;

        if response.status == 204 || is_blank(&response.body) {
            return Ok(None);
        }

        serde_json::from_slice(&response.body)
            .map(Some)
            .map_err(|e| decode_error(&e))
    }

    /// Returns the body verbatim for successful responses.
    pub fn parse_bytes(response: HttpResponse) -> ResendResult<Bytes> {
        Self::check_status(&response)?;
        Ok(response.body)
    }

    /// Fails with a categorized error for non-2xx responses and for
    /// rate-limit shaped error messages.
    pub fn check_status(response: &HttpResponse) -> ResendResult<()> {
        if (200..300).contains(&response.status) {
            return Ok(());
        }
        Err(Self::parse_error_response(response))
    }

    /// Maps an error response to the appropriate error type.
    ///
    /// - 429, or any message mentioning a rate limit -> `RateLimit`
    /// - 400 / 422 -> `InvalidRequest`
    /// - anything else -> `Api`, with "Unknown Error" when no message is given
    pub fn parse_error_response(response: &HttpResponse) -> ResendError {
        let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
        let message = body.message.filter(|m| !m.is_empty());

        let rate_limited = response.status == 429
            || message.as_deref().map(is_rate_limit_message).unwrap_or(false);

        if rate_limited {
            let info = Self::extract_rate_limit(response, message);
            tracing::warn!(
                status = response.status,
                retry_after = info.retry_after.as_deref().unwrap_or(""),
                "Rate limit reached"
            );
            return ResendError::RateLimit(info);
        }

        let status = body.status_code.unwrap_or(response.status);
        tracing::debug!(status, name = ?body.name, "API error occurred");

        match response.status {
            400 | 422 => ResendError::InvalidRequest {
                status,
                name: body.name,
                message: message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
            _ => ResendError::Api {
                status,
                name: body.name,
                message: message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
        }
    }

    /// Builds a rate limit error from response headers.
    pub fn extract_rate_limit(response: &HttpResponse, message: Option<String>) -> RateLimitError {
        let header = |name: &str| response.header(name).map(str::to_string);

        RateLimitError {
            message: message.unwrap_or_else(|| DEFAULT_RATE_LIMIT_MESSAGE.to_string()),
            status: Some(response.status),
            limit: header(HEADER_RATELIMIT_LIMIT),
            remaining: header(HEADER_RATELIMIT_REMAINING),
            reset: header(HEADER_RATELIMIT_RESET),
            retry_after: header(HEADER_RETRY_AFTER),
        }
    }
}

fn is_rate_limit_message(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("rate limit") || message.contains("too many requests")
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

// serde_json messages can quote offending values; report position only.
fn decode_error(error: &serde_json::Error) -> ResendError {
    let category = match error.classify() {
        serde_json::error::Category::Io => "io",
        serde_json::error::Category::Syntax => "syntax",
        serde_json::error::Category::Data => "data",
        serde_json::error::Category::Eof => "eof",
    };
    ResendError::Decode(format!(
        "Failed to decode response body ({} error at line {}, column {})",
        category,
        error.line(),
        error.column()
    ))
}
