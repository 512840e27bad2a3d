/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Cancellation and deadline signal threaded through every API call.
//!
//! A [`RequestContext`] is cheap to clone; clones share the same cancellation
//! flag, so cancelling any of them cancels every in-flight request using it.

use crate::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cancellation flag plus optional deadline for one or more requests
#[derive(Debug, Clone)]
pub struct RequestContext {
    cancel: Arc<watch::Sender<bool>>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that never expires and is only done when [`cancel`](Self::cancel) is called
    #[must_use]
    pub fn background() -> Self {
        let (cancel, _) = watch::channel(false);
        Self {
            cancel: Arc::new(cancel),
            deadline: None,
        }
    }

    /// A context that expires `timeout` from now
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::background()
        }
    }

    /// Derives a context sharing this one's cancellation flag whose deadline is
    /// the earlier of the current deadline and `timeout` from now
    #[must_use]
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(current) if current <= candidate => current,
            _ => candidate,
        };
        Self {
            cancel: Arc::clone(&self.cancel),
            deadline: Some(deadline),
        }
    }

    /// Cancels this context and every clone of it
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// The deadline, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The error describing why the context is done, or `None` while it is still live.
    /// Cancellation is reported before an expired deadline.
    #[must_use]
    pub fn err(&self) -> Option<AppError> {
        if self.is_cancelled() {
            return Some(AppError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(AppError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context is cancelled or its deadline passes
    pub async fn done(&self) -> AppError {
        let mut receiver = self.cancel.subscribe();
        let cancelled = async move {
            let closed = receiver.wait_for(|cancelled| *cancelled).await.is_err();
            if closed {
                // sender lives as long as self, so this only happens on shutdown
                std::future::pending::<()>().await;
            }
        };

        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                _ = cancelled => AppError::Cancelled,
                _ = tokio::time::sleep_until(deadline) => AppError::DeadlineExceeded,
            },
            None => {
                cancelled.await;
                AppError::Cancelled
            }
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
