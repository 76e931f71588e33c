//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays canned responses in order and records every
//! request it receives, so service tests can assert on the exact method, URL,
//! headers and body the client produced.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// # Example
///
/// ```
/// use integrations_resend::mocks::MockHttpTransport;
/// use integrations_resend::ResendClient;
/// use std::sync::Arc;
///
/// # async fn example() -> integrations_resend::ResendResult<()> {
/// let transport = Arc::new(MockHttpTransport::new());
/// transport.enqueue_json_response(200, r#"{"id":"1923781293"}"#);
///
/// let client = ResendClient::builder()
///     .api_key("re_test")
///     .transport(transport.clone())
///     .build()?;
///
/// let email = client.emails().get("1923781293").await?;
/// assert_eq!(email.id, "1923781293");
/// transport.verify_request_count(1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        self.enqueue_response(Ok(HttpResponse::new(status, Bytes::from(body.to_string()))
            .with_header("content-type", "application/json")));
    }

    /// Enqueue a response with no body.
    pub fn enqueue_empty_response(&self, status: u16) {
        self.enqueue_response(Ok(HttpResponse::new(status, Bytes::new())));
    }

    /// Enqueue a transport error.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Get the JSON body of the last request.
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.last_request()
            .and_then(|r| r.body)
            .and_then(|body| serde_json::from_slice(&body).ok())
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.request_count();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request was made with the expected method and a URL ending in `path`.
    pub fn verify_request(&self, index: usize, method: HttpMethod, path: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Expected method {}, got {}", method, request.method);
        assert!(
            request.url.ends_with(path),
            "Expected URL to end with '{}', got '{}'",
            path,
            request.url
        );
    }

    /// Verify that a request carries a header, compared by name case-insensitively.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {}", index);

        let actual = requests[index].header(header_name);
        assert_eq!(
            actual,
            Some(header_value),
            "Expected header '{}' to be '{}', got {:?}",
            header_name,
            header_value,
            actual
        );
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request);

        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(TransportError::Connection(
                "No response configured in MockHttpTransport".to_string(),
            ))
        })
    }
}
