// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::layout::Layout;
use crate::state::ViewState;

/// Render parameters for drawing the content.
///
/// A renderer applies, in order: translate by [`ViewTransform::translate`],
/// scale by [`ViewTransform::scale`] about [`ViewTransform::pivot`], then draws
/// the content at [`ViewTransform::origin_offset`]. [`ViewTransform::to_affine`]
/// folds these into a single affine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Pan translation in view pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Scale pivot: the viewport center.
    pub pivot: Point,
    /// Constant offset centering the unscaled content in the viewport.
    pub origin_offset: Vec2,
}

impl ViewTransform {
    /// Derives the render parameters for `view` under `layout`.
    #[must_use]
    pub fn new(view: &ViewState, layout: &Layout) -> Self {
        let geometry = layout.geometry();
        Self {
            translate: view.translation(geometry),
            scale: view.scale(geometry),
            pivot: layout.viewport_center(),
            origin_offset: geometry.origin_offset(),
        }
    }

    /// Content → view affine.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let pivot = self.pivot.to_vec2();
        Affine::translate(self.translate + pivot)
            * Affine::scale(self.scale)
            * Affine::translate(self.origin_offset - pivot)
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Converts a view-space point into content coordinates (for hit testing).
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.to_affine().inverse() * pt
    }
}
