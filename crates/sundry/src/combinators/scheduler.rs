//! The injectable scheduler seam for deferred invocation.
//!
//! ## Purpose
//!
//! This module defines the [`Scheduler`] capability that `delay` submits
//! tasks to, together with the two provided implementations: a thread-backed
//! scheduler for production use and a virtual-clock scheduler for
//! deterministic tests.
//!
//! ## Design notes
//!
//! * **Injectable seam**: Deferred invocation is expressed against a trait,
//!   not a literal timer primitive, so tests can fast-forward time
//!   deterministically.
//! * **Minimum wait only**: A task runs no earlier than its wait; nothing is
//!   guaranteed about exact firing time or ordering between independently
//!   scheduled tasks.
//! * **No cancellation**: Once submitted, a task will run; no handle is
//!   returned.
//!
//! ## Key concepts
//!
//! * [`ThreadScheduler`]: one spawned thread per task — sleep, then run.
//! * [`ManualScheduler`]: tasks queue against a virtual clock; `advance`
//!   moves the clock and runs everything due, in deadline order with
//!   submission order breaking ties. Tasks may submit further tasks while
//!   running.
//!
//! ## Invariants
//!
//! * `ManualScheduler` never runs a task before its deadline, and runs due
//!   tasks outside its internal lock so re-entrant scheduling cannot
//!   deadlock.

// External dependencies
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

// ============================================================================
// Scheduler Capability
// ============================================================================

/// A deferred task: boxed, sendable, run exactly once.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Capability to run a task after at least a minimum wait.
pub trait Scheduler {
    /// Submit `task` to run no earlier than `wait` from now. Returns
    /// immediately.
    fn schedule(&self, wait: Duration, task: Task);
}

// ============================================================================
// Thread Scheduler
// ============================================================================

/// Production scheduler: each task gets its own thread, which sleeps for at
/// least the requested wait and then runs the task.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    /// Create a thread-backed scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        thread::spawn(move || {
            thread::sleep(wait);
            task();
        });
    }
}

// ============================================================================
// Manual Scheduler
// ============================================================================

/// A task queued against the virtual clock.
struct QueuedTask {
    due: Duration,
    sequence: u64,
    task: Task,
}

/// Mutable scheduler state behind the lock.
#[derive(Default)]
struct ManualState {
    now: Duration,
    next_sequence: u64,
    queue: Vec<QueuedTask>,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Nothing runs until [`advance`](ManualScheduler::advance) moves the clock;
/// tasks whose deadline has been reached then run in (deadline, submission)
/// order.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero and an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.locked().now
    }

    /// Number of tasks still waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.locked().queue.len()
    }

    /// Move the virtual clock forward by `delta` and run every task whose
    /// deadline has been reached, in (deadline, submission) order.
    ///
    /// Tasks run outside the internal lock, so a running task may schedule
    /// further tasks; ones falling due at the new clock run in the same
    /// advance.
    pub fn advance(&self, delta: Duration) {
        let deadline = {
            let mut state = self.locked();
            state.now += delta;
            state.now
        };

        loop {
            let task = {
                let mut state = self.locked();
                let mut next: Option<usize> = None;
                for (index, queued) in state.queue.iter().enumerate() {
                    if queued.due > deadline {
                        continue;
                    }
                    next = match next {
                        None => Some(index),
                        Some(best) => {
                            let current = &state.queue[best];
                            if (queued.due, queued.sequence) < (current.due, current.sequence) {
                                Some(index)
                            } else {
                                Some(best)
                            }
                        }
                    };
                }
                match next {
                    Some(index) => state.queue.swap_remove(index).task,
                    None => break,
                }
            };
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        let mut state = self.locked();
        let due = state.now + wait;
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.queue.push(QueuedTask {
            due,
            sequence,
            task,
        });
    }
}
