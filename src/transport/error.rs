//! Transport layer error types.

/// Transport error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The HTTP stack timed out.
    #[error("Timeout")]
    Timeout,
    /// The request failed after the connection was established.
    #[error("Request error: {0}")]
    Request(String),
    /// The request context was cancelled.
    #[error("Request cancelled")]
    Cancelled,
    /// The request context deadline passed.
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

impl TransportError {
    /// Returns true if the error came from the request context rather than the network.
    pub fn is_context_error(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}
