// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.
//!
//! # Categories
//!
//! - **Backend**: base URL and request timeout
//! - **Gallery**: thumbnail size, strip scrolling, image cache

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default backend base URL (the library server's default bind address).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:51100";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default width of one strip thumbnail, in logical pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 96.0;

/// Minimum thumbnail width.
pub const MIN_THUMBNAIL_WIDTH: f32 = 48.0;

/// Maximum thumbnail width.
pub const MAX_THUMBNAIL_WIDTH: f32 = 256.0;

/// Default distance moved by the strip scroll buttons, in logical pixels.
pub const DEFAULT_SCROLL_STEP_PX: f32 = 240.0;

/// Minimum strip scroll step.
pub const MIN_SCROLL_STEP_PX: f32 = 32.0;

/// Maximum strip scroll step.
pub const MAX_SCROLL_STEP_PX: f32 = 2000.0;

/// Default duration of the strip smooth scroll, in milliseconds.
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 250;

/// Maximum smooth scroll duration. Zero disables the animation.
pub const MAX_SMOOTH_SCROLL_MS: u64 = 2000;

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Spacing between strip thumbnails.
pub const THUMBNAIL_SPACING: f32 = 8.0;

/// Horizontal padding at both ends of the strip.
pub const STRIP_PADDING: f32 = 8.0;

/// Frame interval of the smooth scroll tick.
pub const SCROLL_TICK_MS: u64 = 16;
