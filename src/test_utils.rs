// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for tests.
//!
//! Re-exports the `approx` assertion macro; strip offsets and animation
//! positions are `f32` and must not be compared with `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for offsets that should be exactly equal.
pub const F32_EPSILON: f32 = 1e-4;
