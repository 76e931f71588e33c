//! Cancellation and deadline propagation for requests.
//!
//! Every operation accepts a [`RequestContext`], either explicitly through its
//! `*_with_context` form or implicitly through [`RequestContext::background`].
//! The context is checked before dispatch and raced against the transport
//! while the request is in flight; dropping the transport future aborts the
//! underlying HTTP call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::transport::TransportError;

/// Cancellation token plus optional deadline attached to a request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context driven by an externally owned cancellation token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets an absolute deadline.
    ///
    /// An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Sets a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Gets the cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Gets the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels the context and every request currently using it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns the reason this context is done, if it is.
    pub fn err(&self) -> Option<TransportError> {
        if self.token.is_cancelled() {
            return Some(TransportError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(TransportError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Fails if the context is already cancelled or past its deadline.
    pub fn check(&self) -> Result<(), TransportError> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub async fn done(&self) -> TransportError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => TransportError::Cancelled,
                    _ = tokio::time::sleep_until(deadline) => TransportError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                TransportError::Cancelled
            }
        }
    }

    /// Runs a transport future, aborting it if the context finishes first.
    pub async fn run<T, F>(&self, future: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        self.check()?;
        tokio::select! {
            biased;
            err = self.done() => Err(err),
            result = future => result,
        }
    }
}
