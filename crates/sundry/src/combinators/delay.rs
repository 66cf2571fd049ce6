//! Deferred invocation of a task after a minimum wait.
//!
//! ## Purpose
//!
//! This module provides `delay`: submit one invocation of a callable to a
//! scheduler, to run after at least the requested wait, without blocking the
//! caller.
//!
//! ## Design notes
//!
//! * **Arguments by capture**: The host-language surface forwards trailing
//!   arguments; in Rust the closure captures them
//!   (`delay(&s, wait, move || greet(name))`).
//! * **Independence**: Separately delayed tasks share nothing and may fire
//!   in any order consistent with their individual deadlines.

// External dependencies
use std::time::Duration;

// Internal dependencies
use crate::combinators::scheduler::Scheduler;

// ============================================================================
// Deferred Invocation
// ============================================================================

/// Schedule `task` to run no earlier than `wait` from now; returns
/// immediately. There is no cancellation handle.
pub fn delay<S, F>(scheduler: &S, wait: Duration, task: F)
where
    S: Scheduler + ?Sized,
    F: FnOnce() + Send + 'static,
{
    scheduler.schedule(wait, Box::new(task));
}
