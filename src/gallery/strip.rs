// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip geometry.
//!
//! Thumbnails have a fixed width and are laid out in a single row with
//! uniform spacing and padding, so every position is computable without
//! querying the widget tree.

/// Horizontal offset that puts a thumbnail in the middle of the strip.
///
/// `thumbnail_left - strip_width / 2 + thumbnail_width / 2`, unclamped.
#[must_use]
pub fn centering_offset(thumbnail_left: f32, strip_width: f32, thumbnail_width: f32) -> f32 {
    thumbnail_left - (strip_width / 2.0) + (thumbnail_width / 2.0)
}

/// Layout parameters of the thumbnail row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub thumbnail_width: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl StripGeometry {
    #[must_use]
    pub fn new(thumbnail_width: f32, spacing: f32, padding: f32) -> Self {
        Self {
            thumbnail_width,
            spacing,
            padding,
        }
    }

    /// Left edge of the thumbnail at `index`, in content coordinates.
    #[must_use]
    pub fn thumbnail_left(&self, index: usize) -> f32 {
        self.padding + index as f32 * (self.thumbnail_width + self.spacing)
    }

    /// Total width of a row holding `count` thumbnails.
    #[must_use]
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 2.0 * self.padding;
        }
        let count_f = count as f32;
        2.0 * self.padding + count_f * self.thumbnail_width + (count_f - 1.0) * self.spacing
    }

    /// Largest reachable scroll offset for a strip of `strip_width`.
    #[must_use]
    pub fn max_offset(&self, count: usize, strip_width: f32) -> f32 {
        (self.content_width(count) - strip_width).max(0.0)
    }

    /// Clamps `offset` into the scrollable range.
    #[must_use]
    pub fn clamp_offset(&self, offset: f32, count: usize, strip_width: f32) -> f32 {
        offset.clamp(0.0, self.max_offset(count, strip_width))
    }

    /// Scroll offset centering the thumbnail at `index`, clamped to the
    /// reachable range.
    #[must_use]
    pub fn centered_offset(&self, index: usize, count: usize, strip_width: f32) -> f32 {
        let raw = centering_offset(self.thumbnail_left(index), strip_width, self.thumbnail_width);
        self.clamp_offset(raw, count, strip_width)
    }

    /// Offset after shifting the strip by `delta` pixels (negative = left).
    #[must_use]
    pub fn stepped_offset(&self, current: f32, delta: f32, count: usize, strip_width: f32) -> f32 {
        self.clamp_offset(current + delta, count, strip_width)
    }
}
