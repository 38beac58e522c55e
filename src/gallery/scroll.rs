// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling for the thumbnail strip.
//!
//! Iced scroll operations jump instantly, so the strip animates by issuing a
//! sequence of absolute offsets driven by a frame tick. The tick subscription
//! only exists while [`SmoothScroll::is_animating`] is true.

use std::time::{Duration, Instant};

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated offset at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.progress_at(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// Strip scroll position plus the animation currently moving it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f32,
    animation: Option<ScrollAnimation>,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: 0.0,
            animation: None,
            duration,
        }
    }

    /// Last offset applied to (or reported by) the strip.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the strip is heading: the animation target, or the current offset.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.animation.map_or(self.current, |a| a.target())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Records an offset reported by the widget (user drag or wheel).
    ///
    /// Ignored while animating: the reports are echoes of our own steps.
    pub fn observe(&mut self, offset: f32) {
        if self.animation.is_none() {
            self.current = offset;
        }
    }

    /// Starts animating toward `target` from the current offset.
    ///
    /// Returns an offset to apply right away when no animation is needed
    /// (zero duration), otherwise `None` and the ticks take over.
    pub fn animate_to(&mut self, target: f32, now: Instant) -> Option<f32> {
        if self.duration.is_zero() {
            return Some(self.jump_to(target));
        }
        if let Some(animation) = self.animation {
            self.current = animation.offset_at(now);
        }
        if (self.current - target).abs() < f32::EPSILON {
            self.animation = None;
            return None;
        }
        self.animation = Some(ScrollAnimation::new(self.current, target, self.duration, now));
        None
    }

    /// Cancels any animation and moves straight to `target`.
    pub fn jump_to(&mut self, target: f32) -> f32 {
        self.animation = None;
        self.current = target;
        target
    }

    /// Advances the animation; returns the offset to apply this frame.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        self.current = animation.offset_at(now);
        if animation.is_finished_at(now) {
            self.current = animation.target();
            self.animation = None;
        }
        Some(self.current)
    }
}
