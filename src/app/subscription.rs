// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are declared from state: the gallery keyboard listener
//! exists only while the detail screen shows a model with images, and the
//! notification tick only while toasts are visible.

use super::{Message, Screen};
use crate::ui::detail;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss tick.
const NOTIFICATION_TICK_MS: u64 = 100;

/// Window size, fed to the gallery strip as its width until the strip
/// reports its own.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size.width)),
        _ => None,
    })
}

/// Gallery keyboard and scroll animation, detail screen only.
pub fn create_gallery_subscription(screen: Screen, detail: &detail::State) -> Subscription<Message> {
    if gallery_keys_active(screen, detail) {
        detail.subscription().map(Message::Detail)
    } else {
        Subscription::none()
    }
}

/// Whether arrow keys are routed to the gallery.
#[must_use]
pub fn gallery_keys_active(screen: Screen, detail: &detail::State) -> bool {
    screen == Screen::Detail && detail.accepts_keyboard()
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
