//! API key handling.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Resend API key.
///
/// The key is normalized on construction: surrounding whitespace and quotes
/// (as often left behind by `.env` files) are stripped.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Creates an API key from a raw string.
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self(SecretString::new(normalize_key(&key)))
    }

    /// Returns true if the key is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Returns the `Authorization` header value.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }

    /// Returns a masked prefix suitable for logs.
    pub fn masked(&self) -> String {
        let key = self.0.expose_secret();
        if key.starts_with("re_") {
            "re_***".to_string()
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<SecretString> for ApiKey {
    fn from(key: SecretString) -> Self {
        Self::new(key.expose_secret().as_str())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
