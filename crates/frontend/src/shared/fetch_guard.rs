//! Ownership of in-flight fetches by a mounted view.
//!
//! A view creates one [`FetchGuard`], takes a [`FetchTicket`] for every request it
//! starts and disposes the guard on cleanup. A response may only be written into
//! view state while its ticket is current: the view is still mounted and no newer
//! request was started.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    inner: Arc<GuardState>,
}

#[derive(Debug, Default)]
struct GuardState {
    generation: AtomicU64,
    disposed: AtomicBool,
}

/// Token of one started request.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    inner: Arc<GuardState>,
    generation: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request; tickets of earlier requests stop being current.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            inner: Arc::clone(&self.inner),
            generation,
        }
    }

    /// Called when the owning view is torn down.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        !self.inner.disposed.load(Ordering::SeqCst)
            && self.inner.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket_is_current() {
        let guard = FetchGuard::new();
        let ticket = guard.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_dispose_invalidates_outstanding_tickets() {
        let guard = FetchGuard::new();
        let ticket = guard.begin();
        guard.clone().dispose();
        assert!(guard.is_disposed());
        assert!(!ticket.is_current());
        assert!(!guard.begin().is_current());
    }
}
