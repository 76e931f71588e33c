//! Configuration types for the Resend client.

use crate::auth::ApiKey;
use crate::errors::{ResendError, ResendResult};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Default Resend API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Default User-Agent header, tagged with the library version.
pub const DEFAULT_USER_AGENT: &str = concat!("resend-rust/", env!("CARGO_PKG_VERSION"));

/// Default request timeout for the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout for the built-in transport.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend client configuration.
///
/// Immutable once a client is built from it.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API credential.
    pub api_key: ApiKey,
    /// API base URL.
    pub base_url: Url,
    /// User-Agent header.
    pub user_agent: String,
    /// Headers added to every request.
    pub headers: HashMap<String, String>,
    /// Request timeout (built-in transport only).
    pub timeout: Duration,
    /// Connect timeout (built-in transport only).
    pub connect_timeout: Duration,
}

impl ResendConfig {
    /// Creates a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> ResendConfigBuilder {
        ResendConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ResendResult<()> {
        if self.api_key.is_empty() {
            return Err(ResendError::configuration("API key cannot be empty"));
        }

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ResendError::configuration(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(ResendError::configuration("User-Agent cannot be empty"));
        }

        Ok(())
    }
}

fn default_base_url() -> Url {
    #[allow(clippy::expect_used)]
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Builder for ResendConfig.
#[derive(Debug, Default)]
pub struct ResendConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    user_agent: Option<String>,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ResendConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ResendResult<ResendConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| ResendError::configuration("API key is required"))?;

        let base_url = match self.base_url {
            Some(raw) => Url::parse(&raw).map_err(|e| {
                ResendError::configuration(format!("Invalid base URL '{}': {}", raw, e))
            })?,
            None => default_base_url(),
        };

        let config = ResendConfig {
            api_key,
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            headers: self.headers,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        };

        config.validate()?;
        Ok(config)
    }
}
