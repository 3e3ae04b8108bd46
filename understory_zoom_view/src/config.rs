// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default extra magnification applied on top of the axis-filling scale.
pub const DEFAULT_EXTRA_SCALE_FACTOR: f64 = 1.5;

/// Tunables for a [`crate::ZoomController`] and [`crate::Layout`].
///
/// This is consulted by [`crate::Layout::new`] on every layout pass, so
/// changing it through [`crate::ZoomController::set_config`] takes effect
/// on the next viewport or content change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Multiplier applied to the axis-filling scale to produce the zoom level.
    ///
    /// Must be finite and greater than `1`; other values make layout fail with
    /// [`crate::GeometryError::InvalidExtraScale`].
    pub extra_scale_factor: f64,
}

impl ZoomConfig {
    /// Creates a config with the default extra magnification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extra_scale_factor: DEFAULT_EXTRA_SCALE_FACTOR,
        }
    }

    /// Returns a copy with a different extra magnification.
    #[must_use]
    pub const fn with_extra_scale_factor(mut self, factor: f64) -> Self {
        self.extra_scale_factor = factor;
        self
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}
