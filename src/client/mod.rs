//! Resend API client implementation.

use crate::auth::ApiKey;
use crate::config::{ResendConfig, ResendConfigBuilder};
use crate::context::RequestContext;
use crate::errors::ResendResult;
use crate::services::*;
use crate::transport::{
    HttpMethod, HttpResponse, HttpTransport, RequestBuilder, ReqwestTransport, ResponseParser,
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Resend API client.
///
/// Cheap to clone; clones share the same transport. Configuration is fixed
/// once the client is built.
#[derive(Clone)]
pub struct ResendClient {
    /// Configuration.
    config: Arc<ResendConfig>,
    /// HTTP transport.
    transport: Arc<dyn HttpTransport>,
    /// Request builder.
    request_builder: RequestBuilder,
}

impl fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("api_key", &self.config.api_key)
            .finish_non_exhaustive()
    }
}

impl ResendClient {
    /// Creates a client with default settings and the built-in transport.
    pub fn new(api_key: impl Into<ApiKey>) -> ResendResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client from a configuration, using the built-in transport.
    pub fn from_config(config: ResendConfig) -> ResendResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from a configuration and an injected transport.
    pub fn with_transport(config: ResendConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let request_builder = RequestBuilder::new(&config);
        Self {
            config: Arc::new(config),
            transport,
            request_builder,
        }
    }

    /// Creates a new client builder.
    pub fn builder() -> ResendClientBuilder {
        ResendClientBuilder::new()
    }

    /// Gets the configuration.
    pub fn config(&self) -> &ResendConfig {
        &self.config
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    // Service accessors

    /// Gets the emails service.
    pub fn emails(&self) -> EmailsService<'_> {
        EmailsService::new(self)
    }

    /// Gets the batch send service.
    pub fn batch(&self) -> BatchService<'_> {
        BatchService::new(self)
    }

    /// Gets the received emails service.
    pub fn received_emails(&self) -> ReceivedEmailsService<'_> {
        ReceivedEmailsService::new(self)
    }

    /// Gets the domains service.
    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    /// Gets the API keys service.
    pub fn api_keys(&self) -> ApiKeysService<'_> {
        ApiKeysService::new(self)
    }

    /// Gets the segments service.
    pub fn segments(&self) -> SegmentsService<'_> {
        SegmentsService::new(self)
    }

    /// Gets the audiences service.
    #[deprecated(note = "audiences are now segments; use `segments()`")]
    pub fn audiences(&self) -> AudiencesService<'_> {
        AudiencesService::new(self)
    }

    /// Gets the global contacts service.
    pub fn contacts(&self) -> ContactsService<'_> {
        ContactsService::new(self)
    }

    /// Gets the audience-scoped contacts service.
    pub fn audience_contacts(&self) -> AudienceContactsService<'_> {
        AudienceContactsService::new(self)
    }

    /// Gets the contact properties service.
    pub fn contact_properties(&self) -> ContactPropertiesService<'_> {
        ContactPropertiesService::new(self)
    }

    /// Gets the topics service.
    pub fn topics(&self) -> TopicsService<'_> {
        TopicsService::new(self)
    }

    /// Gets the broadcasts service.
    pub fn broadcasts(&self) -> BroadcastsService<'_> {
        BroadcastsService::new(self)
    }

    /// Gets the templates service.
    pub fn templates(&self) -> TemplatesService<'_> {
        TemplatesService::new(self)
    }

    /// Gets the webhooks service.
    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> ResendResult<T> {
        self.request::<T, ()>(ctx, HttpMethod::Get, path, None, None)
            .await
    }

    /// Makes a POST request.
    pub async fn post<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> ResendResult<T> {
        self.request(ctx, HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Makes a POST request without a body.
    pub async fn post_empty<T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> ResendResult<T> {
        self.request::<T, ()>(ctx, HttpMethod::Post, path, None, None)
            .await
    }

    /// Makes a POST request with additional headers.
    pub async fn post_with_headers<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
        headers: HashMap<String, String>,
    ) -> ResendResult<T> {
        self.request(ctx, HttpMethod::Post, path, Some(body), Some(headers))
            .await
    }

    /// Makes a PATCH request.
    pub async fn patch<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> ResendResult<T> {
        self.request(ctx, HttpMethod::Patch, path, Some(body), None)
            .await
    }

    /// Makes a DELETE request.
    pub async fn delete<T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> ResendResult<T> {
        self.request::<T, ()>(ctx, HttpMethod::Delete, path, None, None)
            .await
    }

    /// Makes a request and returns the response body verbatim.
    pub async fn raw_request<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> ResendResult<Bytes> {
        let response = self.execute(ctx, method, path, body, None).await?;
        ResponseParser::parse_bytes(response)
    }

    // Internal methods

    /// Builds, dispatches and decodes a request.
    ///
    /// A `204` or an empty success body yields `T::default()`.
    async fn request<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        headers: Option<HashMap<String, String>>,
    ) -> ResendResult<T> {
        let response = self.execute(ctx, method, path, body, headers).await?;
        let parsed = ResponseParser::parse_response(response)?;
        Ok(parsed.unwrap_or_default())
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        headers: Option<HashMap<String, String>>,
    ) -> ResendResult<HttpResponse> {
        ctx.check()?;

        let request = self
            .request_builder
            .build_request(ctx, method, path, body, headers)?;

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = ctx.run(self.transport.send(request)).await?;

        tracing::debug!(status = response.status, "Received response");

        Ok(response)
    }
}

/// Builder for ResendClient.
pub struct ResendClientBuilder {
    config_builder: ResendConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ResendClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: ResendConfig::builder(),
            transport: None,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.config_builder = self.config_builder.api_key(key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets the request timeout of the built-in transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the connect timeout of the built-in transport.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.connect_timeout(timeout);
        self
    }

    /// Injects the HTTP stack. The built-in reqwest transport is used otherwise.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> ResendResult<ResendClient> {
        let config = self.config_builder.build()?;
        match self.transport {
            Some(transport) => Ok(ResendClient::with_transport(config, transport)),
            None => ResendClient::from_config(config),
        }
    }
}

impl Default for ResendClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
