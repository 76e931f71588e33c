//! Resend webhook signature verification.
//!
//! Deliveries are signed with HMAC-SHA256 over `"{id}.{timestamp}.{body}"`
//! using the endpoint's `whsec_` secret. The `webhook-signature` header holds
//! one or more space separated `v1,<base64>` entries so a delivery stays
//! valid while a secret is being rotated.

use crate::errors::{ResendError, ResendResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretVec};
use sha2::Sha256;
use std::fmt;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Prefix of webhook signing secrets.
pub const SECRET_PREFIX: &str = "whsec_";

/// Signature scheme tag.
pub const SIGNATURE_VERSION: &str = "v1";

/// Default allowed clock skew between sender and receiver.
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(5 * 60);

const ID_HEADERS: [&str; 2] = ["webhook-id", "svix-id"];
const TIMESTAMP_HEADERS: [&str; 2] = ["webhook-timestamp", "svix-timestamp"];
const SIGNATURE_HEADERS: [&str; 2] = ["webhook-signature", "svix-signature"];

/// Signature headers of an inbound delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    /// `webhook-id` (or `svix-id`).
    pub id: String,
    /// `webhook-timestamp` (or `svix-timestamp`), seconds since the epoch.
    pub timestamp: String,
    /// `webhook-signature` (or `svix-signature`).
    pub signature: String,
}

impl WebhookHeaders {
    /// Creates headers from their values.
    pub fn new(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            signature: signature.into(),
        }
    }

    /// Extracts the headers from name/value pairs.
    ///
    /// Names are matched case-insensitively; `webhook-*` names win over
    /// their `svix-*` aliases.
    pub fn from_pairs<I, K, V>(pairs: I) -> ResendResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.as_ref().to_string()))
            .collect();

        let find = |names: &[&str]| -> ResendResult<String> {
            names
                .iter()
                .find_map(|name| {
                    pairs
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| value.clone())
                })
                .ok_or_else(|| {
                    ResendError::WebhookFormat(format!("Missing {} header", names[0]))
                })
        };

        Ok(Self {
            id: find(&ID_HEADERS[..])?,
            timestamp: find(&TIMESTAMP_HEADERS[..])?,
            signature: find(&SIGNATURE_HEADERS[..])?,
        })
    }

    /// Extracts the headers from an HTTP header map.
    pub fn from_header_map(headers: &HeaderMap) -> ResendResult<Self> {
        Self::from_pairs(
            headers
                .iter()
                .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v))),
        )
    }
}

/// Verifies inbound webhook deliveries.
pub struct WebhookVerifier {
    key: SecretVec<u8>,
    tolerance: Duration,
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl WebhookVerifier {
    /// Creates a verifier from a `whsec_<base64>` signing secret.
    pub fn new(secret: &str) -> ResendResult<Self> {
        let encoded = secret.trim();
        let encoded = encoded.strip_prefix(SECRET_PREFIX).unwrap_or(encoded);

        let key = STANDARD
            .decode(encoded)
            .map_err(|e| ResendError::WebhookFormat(format!("Invalid webhook secret: {}", e)))?;

        if key.is_empty() {
            return Err(ResendError::WebhookFormat(
                "Webhook secret cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            key: SecretVec::new(key),
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Sets the allowed clock skew.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Gets the allowed clock skew.
    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    /// Verifies a delivery against the current time.
    pub fn verify(&self, headers: &WebhookHeaders, body: &[u8]) -> ResendResult<()> {
        self.verify_at(headers, body, Utc::now())
    }

    /// Verifies a delivery against the given time.
    pub fn verify_at(
        &self,
        headers: &WebhookHeaders,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> ResendResult<()> {
        let timestamp = parse_timestamp(&headers.timestamp)?;

        let skew = now.timestamp().abs_diff(timestamp);
        if skew > self.tolerance.as_secs() {
            return Err(ResendError::WebhookTimestamp(format!(
                "Timestamp {} is outside the {}s tolerance",
                timestamp,
                self.tolerance.as_secs()
            )));
        }

        let mac = self.mac(&headers.id, &headers.timestamp, body)?;

        let matched = headers
            .signature
            .split_whitespace()
            .filter_map(|entry| entry.split_once(','))
            .filter(|(version, _)| *version == SIGNATURE_VERSION)
            .filter_map(|(_, encoded)| STANDARD.decode(encoded).ok())
            // verify_slice compares in constant time
            .any(|candidate| mac.clone().verify_slice(&candidate).is_ok());

        if matched {
            Ok(())
        } else {
            tracing::debug!(webhook_id = %headers.id, "No matching webhook signature");
            Err(ResendError::WebhookSignature(
                "No matching signature found".to_string(),
            ))
        }
    }

    /// Computes the `v1,<base64>` signature for a delivery.
    pub fn sign(&self, id: &str, timestamp: &str, body: &[u8]) -> ResendResult<String> {
        let digest = self.mac(id, timestamp, body)?.finalize().into_bytes();
        Ok(format!("{},{}", SIGNATURE_VERSION, STANDARD.encode(digest)))
    }

    fn mac(&self, id: &str, timestamp: &str, body: &[u8]) -> ResendResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret())
            .map_err(|e| ResendError::WebhookFormat(format!("Failed to create HMAC: {}", e)))?;
        mac.update(id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body);
        Ok(mac)
    }
}

fn parse_timestamp(raw: &str) -> ResendResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ResendError::WebhookFormat(format!("Invalid webhook timestamp '{}'", raw)))
}
