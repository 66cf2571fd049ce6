//! Once-only execution with a cached result.
//!
//! ## Purpose
//!
//! This module wraps a callable so that it runs at most one time: the first
//! call invokes it and caches the result, every later call returns the
//! cached value without re-invoking, whatever arguments it is given.
//!
//! ## Design notes
//!
//! * **Wrapper struct**: The host-language contract returns a closure over
//!   hidden state; the Rust rendition is a value owning both the pending
//!   callable and the cache slot.
//! * **Consuming invocation**: The wrapped callable is `FnOnce`; taking it
//!   out of the wrapper on first use makes "at most one invocation" a move
//!   the compiler enforces rather than a runtime flag.
//!
//! ## Invariants
//!
//! * Exactly one of {pending callable, cached result} is present at any
//!   time.
//! * All calls after the first observe the identical cached value.

// ============================================================================
// Once Wrapper
// ============================================================================

/// A callable that runs at most once, then replays its cached result.
#[derive(Debug)]
pub struct Once<F, R> {
    func: Option<F>,
    result: Option<R>,
}

impl<F, R: Clone> Once<F, R> {
    /// Wrap a callable; nothing is invoked yet.
    pub fn new(func: F) -> Self {
        Self {
            func: Some(func),
            result: None,
        }
    }

    /// Invoke on the first call and cache; replay the cached value on every
    /// later call, ignoring the new arguments.
    pub fn call<A>(&mut self, args: A) -> R
    where
        F: FnOnce(A) -> R,
    {
        if let Some(func) = self.func.take() {
            self.result = Some(func(args));
        }
        match &self.result {
            Some(result) => result.clone(),
            // the callable is only consumed after the cache is filled
            None => unreachable!("a Once wrapper is either pending or completed"),
        }
    }

    /// Whether the underlying callable has already run.
    #[inline]
    pub fn has_run(&self) -> bool {
        self.result.is_some()
    }
}
