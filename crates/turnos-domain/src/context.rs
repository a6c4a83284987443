//! Per-request cancellation and deadline
//!
//! Every service and repository operation receives a `RequestContext`.
//! Repositories call [`RequestContext::check`] before touching the store so
//! an already-cancelled or expired request never starts a write.

use std::time::{Duration, Instant};

use tokio_util::sync::{CancellationToken, DropGuard};

use crate::errors::{DomainError, DomainResult};

/// Cancellation signal plus optional deadline, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Context expiring `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Context expiring at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Context driven by an externally owned token
    pub fn with_token(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            deadline: None,
        }
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Guard that cancels the context when dropped
    pub fn drop_guard(&self) -> DropGuard {
        self.cancel.clone().drop_guard()
    }

    /// Fail fast if the caller gave up or the deadline passed
    pub fn check(&self) -> DomainResult<()> {
        if self.cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(DomainError::DeadlineExceeded);
            }
        }
        Ok(())
    }
}
