// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Legal pan offset range, in content pixels, at full zoom.
///
/// Each axis allows `±(content * zoom_scale - viewport) / 2`. When the content
/// at full zoom is smaller than the viewport on an axis, that axis is
/// degenerate (`min > max`) and clamping pins the offset to exactly `0`.
///
/// Bounds are always derived at the zoom level, never at the current
/// (possibly intermediate) scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Smallest legal horizontal offset.
    pub min_x: f64,
    /// Largest legal horizontal offset.
    pub max_x: f64,
    /// Smallest legal vertical offset.
    pub min_y: f64,
    /// Largest legal vertical offset.
    pub max_y: f64,
}

impl PanBounds {
    /// Computes the pan range for `content` magnified by `zoom_scale` inside `viewport`.
    #[must_use]
    pub fn compute(content: Size, zoom_scale: f64, viewport: Size) -> Self {
        let half_x = (content.width * zoom_scale - viewport.width) / 2.0;
        let half_y = (content.height * zoom_scale - viewport.height) / 2.0;
        Self {
            min_x: -half_x,
            max_x: half_x,
            min_y: -half_y,
            max_y: half_y,
        }
    }

    /// Clamps each axis of `offset` independently into the legal range.
    ///
    /// A NaN component is treated as `0`.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.min_x, self.max_x),
            clamp_axis(offset.y, self.min_y, self.max_y),
        )
    }

    /// Returns `true` if `offset` is already within the legal range.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }

    /// Returns `true` if no horizontal panning is possible.
    #[must_use]
    pub fn is_degenerate_x(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Returns `true` if no vertical panning is possible.
    #[must_use]
    pub fn is_degenerate_y(&self) -> bool {
        self.min_y > self.max_y
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min > max || value.is_nan() {
        return 0.0;
    }
    value.clamp(min, max)
}
