// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Size, Vec2};

/// Error returned when a layout pass cannot produce valid scale levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// The content has a zero, negative, or non-finite dimension.
    InvalidContent(Size),
    /// The viewport has a zero, negative, or non-finite dimension.
    InvalidViewport(Size),
    /// The extra magnification factor is not a finite value greater than `1`.
    InvalidExtraScale(f64),
    /// The sizes are valid on their own but their ratio overflows: a scale
    /// level or the magnified content extent is not finite, or the zoom
    /// level does not exceed the fit level.
    ScaleOutOfRange {
        /// Fit level as computed.
        fit_scale: f64,
        /// Zoom level as computed.
        zoom_scale: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContent(size) => write!(
                f,
                "content size {}x{} must be positive and finite",
                size.width, size.height
            ),
            Self::InvalidViewport(size) => write!(
                f,
                "viewport size {}x{} must be positive and finite",
                size.width, size.height
            ),
            Self::InvalidExtraScale(factor) => write!(
                f,
                "extra scale factor {factor} must be finite and greater than 1"
            ),
            Self::ScaleOutOfRange {
                fit_scale,
                zoom_scale,
            } => write!(
                f,
                "scale levels (fit {fit_scale}, zoom {zoom_scale}) are out of range"
            ),
        }
    }
}

impl core::error::Error for GeometryError {}

/// The two reference magnifications for a piece of content in a viewport.
///
/// `fit_scale` shows the whole content, letterboxed on one axis. `zoom_scale`
/// fills the other axis and then applies an extra magnification on top, so
/// `zoom_scale > fit_scale` always holds for a successfully computed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleGeometry {
    fit_scale: f64,
    zoom_scale: f64,
    origin_offset: Vec2,
}

impl ScaleGeometry {
    /// Derives both scale levels for `content` shown inside `viewport`.
    ///
    /// The axis whose content-to-viewport ratio is larger binds the fit; the
    /// zoom level fills the other axis and is multiplied by `extra_scale`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either size has a zero, negative, or
    /// non-finite dimension, if `extra_scale` is not finite and `> 1`, or if
    /// the resulting levels cannot be represented.
    pub fn compute(content: Size, viewport: Size, extra_scale: f64) -> Result<Self, GeometryError> {
        if !is_valid_size(content) {
            return Err(GeometryError::InvalidContent(content));
        }
        if !is_valid_size(viewport) {
            return Err(GeometryError::InvalidViewport(viewport));
        }
        if !extra_scale.is_finite() || extra_scale <= 1.0 {
            return Err(GeometryError::InvalidExtraScale(extra_scale));
        }

        let width_fit = viewport.width / content.width;
        let height_fit = viewport.height / content.height;
        let width_binds = content.width / viewport.width > content.height / viewport.height;
        let (fit_scale, fill_scale) = if width_binds {
            (width_fit, height_fit)
        } else {
            (height_fit, width_fit)
        };
        let zoom_scale = fill_scale * extra_scale;

        // Pan bounds scale the content by the zoom level and anchoring divides
        // the two levels, so those have to stay finite as well.
        let in_range = fit_scale.is_finite()
            && zoom_scale.is_finite()
            && fit_scale > 0.0
            && zoom_scale > fit_scale
            && (zoom_scale / fit_scale).is_finite()
            && (content.width * zoom_scale).is_finite()
            && (content.height * zoom_scale).is_finite();
        if !in_range {
            return Err(GeometryError::ScaleOutOfRange {
                fit_scale,
                zoom_scale,
            });
        }

        Ok(Self {
            fit_scale,
            zoom_scale,
            origin_offset: Vec2::new(
                (viewport.width - content.width) / 2.0,
                (viewport.height - content.height) / 2.0,
            ),
        })
    }

    /// Magnification at which the whole content is visible.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Magnification reached at full zoom-in.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Offset that centers the unscaled content inside the viewport.
    ///
    /// This is a constant alignment term, independent of zoom and pan.
    #[must_use]
    pub fn origin_offset(&self) -> Vec2 {
        self.origin_offset
    }

    /// Clamps `scale` into `[fit_scale, zoom_scale]`. NaN maps to the fit level.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.fit_scale;
        }
        scale.clamp(self.fit_scale, self.zoom_scale)
    }

    /// Maps `scale` onto `[0, 1]`, where `0` is the fit level and `1` the zoom level.
    #[must_use]
    pub fn normalized(&self, scale: f64) -> f64 {
        (self.clamp_scale(scale) - self.fit_scale) / (self.zoom_scale - self.fit_scale)
    }

    /// Inverse of [`ScaleGeometry::normalized`].
    #[must_use]
    pub fn scale_at(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        self.fit_scale + (self.zoom_scale - self.fit_scale) * t
    }

    /// Returns `true` if `scale` lies strictly between the two levels.
    #[must_use]
    pub fn is_intermediate(&self, scale: f64) -> bool {
        scale > self.fit_scale && scale < self.zoom_scale
    }
}

fn is_valid_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
