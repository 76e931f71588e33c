//! HTTP request builder for the Resend API.
//!
//! This module provides the `RequestBuilder` for turning an operation's
//! method, relative path and typed body into an [`HttpRequest`] carrying the
//! standard headers.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use super::http::{HttpMethod, HttpRequest};
use crate::auth::ApiKey;
use crate::config::ResendConfig;
use crate::context::RequestContext;
use crate::errors::{ResendError, ResendResult};

const ACCEPT: &str = "Accept";
const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";
const USER_AGENT: &str = "User-Agent";
const APPLICATION_JSON: &str = "application/json";

/// Builder for constructing HTTP requests to the Resend API.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    api_key: ApiKey,
    user_agent: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Creates a request builder from a client configuration.
    pub fn new(config: &ResendConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            headers: config.headers.clone(),
        }
    }

    /// Resolves a path against the base URL.
    ///
    /// A leading `/` is optional and any query string in `path` is kept as is.
    /// Identifiers in `path` must already be encoded as single segments.
    pub fn build_url(&self, path: &str) -> ResendResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let raw = format!("{}/{}", base, path);

        Url::parse(&raw)
            .map_err(|e| ResendError::request_build(format!("Failed to resolve URL '{}': {}", raw, e)))
    }

    /// Builds an HTTP request.
    ///
    /// Bodies are dropped for safe methods. For other methods a body that
    /// serializes to JSON `null` is treated as absent.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        context: &RequestContext,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> ResendResult<HttpRequest> {
        let url = self.build_url(path)?;

        let body = match body {
            Some(body) if !method.is_safe() => encode_body(method, path, body)?,
            _ => None,
        };

        let mut headers = HashMap::new();
        for (name, value) in self.headers.iter() {
            set_header(&mut headers, name, value);
        }
        if let Some(extra) = extra_headers {
            for (name, value) in extra.iter() {
                set_header(&mut headers, name, value);
            }
        }

        set_header(&mut headers, ACCEPT, APPLICATION_JSON);
        set_header(&mut headers, USER_AGENT, &self.user_agent);
        set_header(&mut headers, AUTHORIZATION, &self.api_key.bearer_header());
        if body.is_some() {
            set_header(&mut headers, CONTENT_TYPE, APPLICATION_JSON);
        } else {
            headers.retain(|name, _| !name.eq_ignore_ascii_case(CONTENT_TYPE));
        }

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
            context: context.clone(),
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(
    method: HttpMethod,
    path: &str,
    body: &B,
) -> ResendResult<Option<Bytes>> {
    let encoded = serde_json::to_vec(body).map_err(|e| {
        ResendError::request_build(format!(
            "Failed to encode request body for {} {}: {}",
            method, path, e
        ))
    })?;

    if encoded == b"null" {
        Ok(None)
    } else {
        Ok(Some(Bytes::from(encoded)))
    }
}

/// Inserts a header, replacing any existing header with the same name in any case.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value.to_string());
}
