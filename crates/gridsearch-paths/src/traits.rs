use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::context::SearchView;

/// Progress hook invoked synchronously by every search.
///
/// [`observe`](Observer::observe) runs after each expansion step and after
/// each path-reconstruction step. [`is_cancelled`](Observer::is_cancelled)
/// is polled once per dequeue; returning `true` stops the search with
/// [`SearchStatus::Cancelled`](crate::SearchStatus::Cancelled).
///
/// Any `FnMut(&SearchView)` closure is an observer that never cancels.
pub trait Observer {
    /// Called with a read-only view of the run after each step.
    fn observe(&mut self, view: &SearchView<'_>);

    /// Whether the search should stop at the next dequeue.
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(&SearchView<'_>)> Observer for F {
    #[inline]
    fn observe(&mut self, view: &SearchView<'_>) {
        self(view)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&mut self, _view: &SearchView<'_>) {}
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// A cooperative cancellation flag backed by an [`AtomicBool`].
///
/// Clones share the flag, so one clone can live in an input loop or another
/// thread while the search polls the other. On its own it is an observer
/// that only answers the cancellation query.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the token can guard another run.
    #[inline]
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }
}

impl Observer for CancelToken {
    #[inline]
    fn observe(&mut self, _view: &SearchView<'_>) {}

    #[inline]
    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }
}

/// Pairs an observer with a [`CancelToken`].
#[derive(Debug, Clone)]
pub struct Cancellable<O> {
    pub inner: O,
    pub token: CancelToken,
}

impl<O: Observer> Cancellable<O> {
    pub fn new(inner: O, token: CancelToken) -> Self {
        Self { inner, token }
    }
}

impl<O: Observer> Observer for Cancellable<O> {
    #[inline]
    fn observe(&mut self, view: &SearchView<'_>) {
        self.inner.observe(view);
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.inner.is_cancelled()
    }
}
