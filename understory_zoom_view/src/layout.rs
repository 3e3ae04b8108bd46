// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::PanBounds;
use crate::config::ZoomConfig;
use crate::geometry::{GeometryError, ScaleGeometry};

/// One validated layout pass: content and viewport sizes plus everything derived from them.
///
/// A `Layout` only exists for non-degenerate sizes, so code holding one never
/// has to re-check for zero or non-finite dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    content: Size,
    viewport: Size,
    geometry: ScaleGeometry,
    bounds: PanBounds,
}

impl Layout {
    /// Computes scale levels and pan bounds for `content` inside `viewport`.
    ///
    /// # Errors
    ///
    /// Propagates the [`GeometryError`] from [`ScaleGeometry::compute`].
    pub fn new(content: Size, viewport: Size, config: &ZoomConfig) -> Result<Self, GeometryError> {
        let geometry = ScaleGeometry::compute(content, viewport, config.extra_scale_factor)?;
        let bounds = PanBounds::compute(content, geometry.zoom_scale(), viewport);
        Ok(Self {
            content,
            viewport,
            geometry,
            bounds,
        })
    }

    /// Content size in content pixels.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Viewport size in view pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Fit and zoom levels.
    #[must_use]
    pub fn geometry(&self) -> &ScaleGeometry {
        &self.geometry
    }

    /// Pan range at full zoom.
    #[must_use]
    pub fn bounds(&self) -> &PanBounds {
        &self.bounds
    }

    /// Center of the viewport, the pivot for all scaling.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Offset that keeps `focus` visually fixed when going from fit to zoom level.
    ///
    /// The result is clamped into [`Layout::bounds`], so a focus near an edge
    /// may shift slightly rather than expose empty space.
    #[must_use]
    pub fn anchor_offset(&self, focus: Point) -> Vec2 {
        let ratio = 1.0 - self.geometry.zoom_scale() / self.geometry.fit_scale();
        self.bounds.clamp((focus - self.viewport_center()) * ratio)
    }
}
