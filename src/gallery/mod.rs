// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation core.
//!
//! Pure selection arithmetic and strip geometry, kept apart from the Iced
//! view so they can be tested without a UI harness.
//!
//! - [`controller`] - selected image index, wrap-around navigation, model resets
//! - [`strip`] - thumbnail positions and centering offsets
//! - [`scroll`] - eased smooth scrolling of the strip
//! - [`keys`] - arrow key bindings

pub mod controller;
pub mod keys;
pub mod scroll;
pub mod strip;

pub use controller::{ChangeCause, GalleryController, SelectionChanged};
pub use keys::GalleryKey;
pub use scroll::SmoothScroll;
pub use strip::StripGeometry;
