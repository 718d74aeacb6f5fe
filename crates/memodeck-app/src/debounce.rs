//! Single-slot trailing debounce.
//!
//! Holds at most one pending value. Scheduling replaces whatever was pending
//! (cancel-and-reschedule), so only the last event of a burst ever fires.

use std::time::Duration;

/// Pending value with its deadline.
#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    due: Duration,
    value: T,
}

/// Trailing debounce over values of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debounce<T> {
    /// Create an empty debounce that fires `delay` after the last schedule.
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Replace the pending value, restarting the quiet period at `now`.
    pub fn schedule(&mut self, now: Duration, value: T) {
        self.pending = Some(Pending { due: now + self.delay, value });
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending value. `None` if nothing is pending.
    pub fn due(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
