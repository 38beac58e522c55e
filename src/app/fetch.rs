// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of in-flight backend requests.
//!
//! Every model fetch is stamped with a [`Generation`]. Leaving the detail
//! screen or switching to another model advances the [`FetchTracker`], so a
//! result that arrives afterwards no longer matches and is dropped instead of
//! being applied to a view that has moved on.

use iced::task;

/// Monotonic stamp identifying one model load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks the current generation and the abort handle of its request.
#[derive(Debug, Default)]
pub struct FetchTracker {
    current: Generation,
    in_flight: Option<task::Handle>,
}

impl FetchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Generation {
        self.current
    }

    /// Starts a new generation, aborting whatever was in flight.
    pub fn begin(&mut self) -> Generation {
        self.cancel();
        self.current = Generation(self.current.0.wrapping_add(1));
        self.current
    }

    /// Keeps the abort handle of the request belonging to the current
    /// generation. Dropping the tracker's handle aborts it too.
    pub fn attach(&mut self, handle: task::Handle) {
        self.in_flight = Some(handle.abort_on_drop());
    }

    /// Invalidates the current generation without starting a request.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.current = Generation(self.current.0.wrapping_add(1));
    }

    /// Whether a result stamped with `generation` may be applied.
    ///
    /// The first matching result also releases the abort handle.
    pub fn accept(&mut self, generation: Generation) -> bool {
        if generation == self.current {
            self.in_flight = None;
            true
        } else {
            tracing::debug!(
                stale = %generation,
                current = %self.current,
                "discarding result of a superseded fetch"
            );
            false
        }
    }

    /// Like [`accept`](Self::accept) but leaves the abort handle alone, for
    /// secondary results (images) that share the model's generation.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_advances_generation() {
        let mut tracker = FetchTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first, second);
        assert_eq!(tracker.current(), second);
    }

    #[test]
    fn stale_generation_is_rejected() {
        let mut tracker = FetchTracker::new();
        let stale = tracker.begin();
        let fresh = tracker.begin();
        assert!(!tracker.accept(stale));
        assert!(tracker.accept(fresh));
    }

    #[test]
    fn cancel_invalidates_pending_result() {
        let mut tracker = FetchTracker::new();
        let pending = tracker.begin();
        tracker.cancel();
        assert!(!tracker.accept(pending));
        assert!(!tracker.is_current(pending));
    }

    #[test]
    fn generations_are_ordered_by_value() {
        let mut tracker = FetchTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(b.value() > a.value());
    }
}
