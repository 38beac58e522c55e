// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for the gallery.

use iced::keyboard::{self, key::Named, Key};
use iced::event;

/// Navigation requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Previous,
    Next,
}

/// Maps a keyboard event to a gallery navigation, if it is one.
///
/// Only unmodified arrow presses count, so shortcuts like Alt+Left stay free.
#[must_use]
pub fn gallery_key(event: &keyboard::Event) -> Option<GalleryKey> {
    match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modifiers,
            ..
        } if modifiers.is_empty() => match named {
            Named::ArrowLeft => Some(GalleryKey::Previous),
            Named::ArrowRight => Some(GalleryKey::Next),
            _ => None,
        },
        _ => None,
    }
}

/// Filters a raw runtime event down to a gallery key.
///
/// Events already captured by a widget (e.g. a focused text input) are ignored.
#[must_use]
pub fn from_event(event: &event::Event, status: event::Status) -> Option<GalleryKey> {
    if matches!(status, event::Status::Captured) {
        return None;
    }
    match event {
        event::Event::Keyboard(keyboard_event) => gallery_key(keyboard_event),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Physical};
    use iced::keyboard::{Location, Modifiers};

    fn press(named: Named, code: Code, modifiers: Modifiers) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: Physical::Code(code),
            location: Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        }
    }

    #[test]
    fn arrows_map_to_navigation() {
        let left = press(Named::ArrowLeft, Code::ArrowLeft, Modifiers::default());
        let right = press(Named::ArrowRight, Code::ArrowRight, Modifiers::default());
        assert_eq!(gallery_key(&left), Some(GalleryKey::Previous));
        assert_eq!(gallery_key(&right), Some(GalleryKey::Next));
    }

    #[test]
    fn modified_arrows_are_ignored() {
        let alt_left = press(Named::ArrowLeft, Code::ArrowLeft, Modifiers::ALT);
        assert_eq!(gallery_key(&alt_left), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        let up = press(Named::ArrowUp, Code::ArrowUp, Modifiers::default());
        assert_eq!(gallery_key(&up), None);
    }

    #[test]
    fn captured_events_are_ignored() {
        let right = event::Event::Keyboard(press(
            Named::ArrowRight,
            Code::ArrowRight,
            Modifiers::default(),
        ));
        assert_eq!(from_event(&right, event::Status::Captured), None);
        assert_eq!(
            from_event(&right, event::Status::Ignored),
            Some(GalleryKey::Next)
        );
    }
}
