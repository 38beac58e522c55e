// SPDX-License-Identifier: MPL-2.0
//! Remote image handling.

pub mod cache;

pub use cache::{CachedImage, ImageCache};
