// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fitted/zoomed state machine and its focal-point-preserving toggle.

use kurbo::{Point, Vec2};

use crate::driver::AnimationCommand;
use crate::geometry::ScaleGeometry;
use crate::layout::Layout;

/// One of the two named magnification levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomLevel {
    /// The whole content is visible.
    Fit,
    /// Full zoom-in.
    Zoom,
}

impl ZoomLevel {
    /// The scale this level stands for under `geometry`.
    #[must_use]
    pub fn scale(self, geometry: &ScaleGeometry) -> f64 {
        match self {
            Self::Fit => geometry.fit_scale(),
            Self::Zoom => geometry.zoom_scale(),
        }
    }
}

/// An in-flight double-tap transition between the two levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnimation {
    /// Level the transition started from.
    pub from: ZoomLevel,
    /// Level the transition is heading to.
    pub to: ZoomLevel,
    /// View point that triggered the transition.
    pub anchor: Point,
    /// Most recently sampled scale.
    pub scale: f64,
    /// Pan offset at full zoom; the rendered translation is this offset
    /// weighted by the normalized scale, so it animates together with scale.
    pub offset: Vec2,
}

/// Live view parameters.
///
/// Scale and offset travel with the variant that gives them meaning, so a
/// "fitted" view with a stray offset or an intermediate scale cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ViewState {
    /// Content shown at the fit level with no pan.
    #[default]
    Fitted,
    /// Content enlarged above the fit level and pannable.
    Zoomed {
        /// Current scale, in `(fit_scale, zoom_scale]`.
        scale: f64,
        /// Pan offset, always within the layout's [`crate::PanBounds`].
        offset: Vec2,
    },
    /// Animating between the two levels.
    Animating(ZoomAnimation),
}

impl ViewState {
    /// Builds a settled state for `scale` and `offset`.
    ///
    /// Scales at or below the fit level collapse to [`ViewState::Fitted`];
    /// anything else is clamped into range and its offset into the pan bounds.
    #[must_use]
    pub fn zoomed_at(scale: f64, offset: Vec2, layout: &Layout) -> Self {
        let geometry = layout.geometry();
        if scale <= geometry.fit_scale() {
            return Self::Fitted;
        }
        Self::Zoomed {
            scale: geometry.clamp_scale(scale),
            offset: layout.bounds().clamp(offset),
        }
    }

    /// Returns `true` when zoomed or animating toward the zoom level.
    ///
    /// An animation back to the fit level already reports `false` while it
    /// still carries a non-zero [`ViewState::offset`]. Only settled states pair
    /// `!is_zoomed()` with a zero offset.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        match self {
            Self::Fitted => false,
            Self::Zoomed { .. } => true,
            Self::Animating(anim) => anim.to == ZoomLevel::Zoom,
        }
    }

    /// Returns `true` while a double-tap transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }

    /// Current render scale.
    #[must_use]
    pub fn scale(&self, geometry: &ScaleGeometry) -> f64 {
        match self {
            Self::Fitted => geometry.fit_scale(),
            Self::Zoomed { scale, .. } => *scale,
            Self::Animating(anim) => anim.scale,
        }
    }

    /// Pan offset at full zoom.
    ///
    /// Zero when fitted. While animating back to the fit level the offset is
    /// retained so the translation can shrink with scale; it is dropped when
    /// the animation completes. "Not zoomed implies zero offset" therefore
    /// holds for settled states only, while [`ViewState::translation`] is
    /// already zero once an animation samples the fit scale.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        match self {
            Self::Fitted => Vec2::ZERO,
            Self::Zoomed { offset, .. } => *offset,
            Self::Animating(anim) => anim.offset,
        }
    }

    /// Translation actually applied when rendering: the offset weighted by how
    /// far the current scale is between the two levels.
    #[must_use]
    pub fn translation(&self, geometry: &ScaleGeometry) -> Vec2 {
        self.offset() * geometry.normalized(self.scale(geometry))
    }

    /// Flips between the two levels in response to a double tap at `point`.
    ///
    /// Heading toward zoom, the offset is re-anchored so that `point` stays
    /// under the finger at the zoom level. Returns the new state and the command
    /// the animator must run.
    #[must_use]
    pub fn toggle_at(self, layout: &Layout, point: Point) -> (Self, AnimationCommand) {
        let geometry = layout.geometry();
        let scale = self.scale(geometry);
        if self.is_zoomed() {
            let anim = ZoomAnimation {
                from: ZoomLevel::Zoom,
                to: ZoomLevel::Fit,
                anchor: point,
                scale,
                offset: self.offset(),
            };
            (Self::Animating(anim), AnimationCommand::Reverse)
        } else {
            let anim = ZoomAnimation {
                from: ZoomLevel::Fit,
                to: ZoomLevel::Zoom,
                anchor: point,
                scale,
                offset: layout.anchor_offset(point),
            };
            (Self::Animating(anim), AnimationCommand::Start)
        }
    }

    /// Applies one animator sample. States other than [`ViewState::Animating`]
    /// are returned unchanged.
    #[must_use]
    pub fn sample(self, layout: &Layout, value: f64) -> Self {
        match self {
            Self::Animating(anim) => Self::Animating(ZoomAnimation {
                scale: layout.geometry().clamp_scale(value),
                ..anim
            }),
            other => other,
        }
    }

    /// Completes an animation at its destination level.
    #[must_use]
    pub fn finish(self, layout: &Layout) -> Self {
        match self {
            Self::Animating(anim) if anim.to == ZoomLevel::Zoom => Self::Zoomed {
                scale: anim.to.scale(layout.geometry()),
                offset: layout.bounds().clamp(anim.offset),
            },
            Self::Animating(_) => Self::Fitted,
            other => other,
        }
    }

    /// Freezes an animation at its last sampled scale.
    #[must_use]
    pub fn settle(self, layout: &Layout) -> Self {
        match self {
            Self::Animating(anim) => Self::zoomed_at(anim.scale, anim.offset, layout),
            other => other,
        }
    }

    /// Pans by `delta` (subtracted from the offset), if the view is zoomed.
    ///
    /// Returns `None` when the view is not zoomed.
    #[must_use]
    pub fn pan_by(self, layout: &Layout, delta: Vec2) -> Option<Self> {
        let bounds = layout.bounds();
        match self {
            Self::Zoomed { scale, offset } => Some(Self::Zoomed {
                scale,
                offset: bounds.clamp(offset - delta),
            }),
            Self::Animating(anim) if anim.to == ZoomLevel::Zoom => {
                let offset = bounds.clamp(anim.offset - delta);
                Some(Self::Animating(ZoomAnimation { offset, ..anim }))
            }
            _ => None,
        }
    }

    /// Replaces the pan offset of a settled zoomed view, clamped.
    #[must_use]
    pub fn with_offset(self, layout: &Layout, offset: Vec2) -> Self {
        match self {
            Self::Zoomed { scale, .. } => Self::Zoomed {
                scale,
                offset: layout.bounds().clamp(offset),
            },
            other => other,
        }
    }

    /// Re-clamps scale and offset after the layout changed.
    #[must_use]
    pub fn relayout(self, layout: &Layout) -> Self {
        match self {
            Self::Fitted => Self::Fitted,
            Self::Zoomed { scale, offset } => Self::zoomed_at(scale, offset, layout),
            Self::Animating(anim) => Self::Animating(ZoomAnimation {
                scale: layout.geometry().clamp_scale(anim.scale),
                offset: layout.bounds().clamp(anim.offset),
                ..anim
            }),
        }
    }

    /// Checks the scale range and pan bounds against `layout`.
    #[must_use]
    pub fn satisfies_invariants(&self, layout: &Layout) -> bool {
        let geometry = layout.geometry();
        let scale = self.scale(geometry);
        let scale_ok = scale >= geometry.fit_scale() && scale <= geometry.zoom_scale();
        let offset_ok = match self {
            Self::Fitted => true,
            Self::Zoomed { offset, .. } => layout.bounds().contains(*offset),
            Self::Animating(anim) => layout.bounds().contains(anim.offset),
        };
        scale_ok && offset_ok
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewState, ZoomLevel};
    use crate::driver::AnimationCommand;
    use crate::{Layout, ZoomConfig};

    fn wide_layout() -> Layout {
        Layout::new(
            Size::new(2000.0, 1000.0),
            Size::new(1000.0, 1000.0),
            &ZoomConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn levels_resolve_against_geometry() {
        let layout = wide_layout();
        assert_eq!(ZoomLevel::Fit.scale(layout.geometry()), 0.5);
        assert_eq!(ZoomLevel::Zoom.scale(layout.geometry()), 1.5);
    }

    #[test]
    fn initial_state_is_fitted() {
        let layout = wide_layout();
        let view = ViewState::default();
        assert_eq!(view, ViewState::Fitted);
        assert_eq!(view.scale(layout.geometry()), 0.5);
        assert_eq!(view.offset(), Vec2::ZERO);
        assert!(!view.is_zoomed());
    }

    #[test]
    fn toggle_from_fitted_anchors_and_starts() {
        let layout = wide_layout();
        let (view, cmd) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
        assert_eq!(cmd, AnimationCommand::Start);
        assert!(view.is_zoomed());
        assert!(view.is_animating());
        assert_eq!(view.offset(), Vec2::new(-200.0, 0.0));
        // Nothing has been sampled yet, so the view still renders at fit.
        assert_eq!(view.scale(layout.geometry()), 0.5);
        assert_eq!(view.translation(layout.geometry()), Vec2::ZERO);
    }

    #[test]
    fn samples_interpolate_translation_with_scale() {
        let layout = wide_layout();
        let (view, _) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
        let view = view.sample(&layout, 1.0);
        assert_eq!(view.scale(layout.geometry()), 1.0);
        let translation = view.translation(layout.geometry());
        assert!((translation.x - -100.0).abs() < 1e-9);

        // Out-of-range samples are clamped.
        let view = view.sample(&layout, 9.0);
        assert_eq!(view.scale(layout.geometry()), 1.5);
    }

    #[test]
    fn finish_reaches_destination_level() {
        let layout = wide_layout();
        let (view, _) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
        let zoomed = view.finish(&layout);
        assert_eq!(
            zoomed,
            ViewState::Zoomed {
                scale: 1.5,
                offset: Vec2::new(-200.0, 0.0)
            }
        );

        let (view, cmd) = zoomed.toggle_at(&layout, Point::new(10.0, 10.0));
        assert_eq!(cmd, AnimationCommand::Reverse);
        assert!(!view.is_zoomed());
        // The offset is kept while shrinking back and dropped on completion.
        assert_eq!(view.offset(), Vec2::new(-200.0, 0.0));
        let landed = view.sample(&layout, 0.5);
        assert_eq!(landed.offset(), Vec2::new(-200.0, 0.0));
        assert_eq!(landed.translation(layout.geometry()), Vec2::ZERO);
        assert_eq!(landed.finish(&layout), ViewState::Fitted);
    }

    #[test]
    fn toggling_mid_animation_redirects() {
        let layout = wide_layout();
        let (view, _) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
        let view = view.sample(&layout, 1.2);
        let (view, cmd) = view.toggle_at(&layout, Point::new(600.0, 500.0));
        assert_eq!(cmd, AnimationCommand::Reverse);
        match view {
            ViewState::Animating(anim) => {
                assert_eq!(anim.from, ZoomLevel::Zoom);
                assert_eq!(anim.to, ZoomLevel::Fit);
                assert_eq!(anim.scale, 1.2);
            }
            other => panic!("expected animation, got {other:?}"),
        }
    }

    #[test]
    fn settle_freezes_sampled_scale() {
        let layout = wide_layout();
        let (view, _) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
        assert_eq!(view.settle(&layout), ViewState::Fitted);
        let view = view.sample(&layout, 1.25).settle(&layout);
        assert_eq!(
            view,
            ViewState::Zoomed {
                scale: 1.25,
                offset: Vec2::new(-200.0, 0.0)
            }
        );
    }

    #[test]
    fn pan_only_applies_when_zoomed() {
        let layout = wide_layout();
        assert_eq!(ViewState::Fitted.pan_by(&layout, Vec2::new(5.0, 5.0)), None);

        let zoomed = ViewState::Zoomed {
            scale: 1.5,
            offset: Vec2::ZERO,
        };
        let panned = zoomed.pan_by(&layout, Vec2::new(2000.0, 0.0)).unwrap();
        assert_eq!(panned.offset(), Vec2::new(-1000.0, 0.0));
        assert!(panned.satisfies_invariants(&layout));

        // Heading to fit, the offset is on its way out and cannot be panned.
        let (leaving, _) = zoomed.toggle_at(&layout, Point::ZERO);
        assert_eq!(leaving.pan_by(&layout, Vec2::new(1.0, 0.0)), None);
    }

    #[test]
    fn relayout_clamps_into_new_range() {
        let layout = wide_layout();
        let view = ViewState::Zoomed {
            scale: 1.5,
            offset: Vec2::new(1000.0, 250.0),
        };
        // Larger viewport: fit 1.0, zoom 3.0, bounds x ±2000, y ±500.
        let bigger = Layout::new(
            Size::new(2000.0, 1000.0),
            Size::new(2000.0, 2000.0),
            &ZoomConfig::default(),
        )
        .unwrap();
        let view = view.relayout(&bigger);
        assert_eq!(
            view,
            ViewState::Zoomed {
                scale: 1.5,
                offset: Vec2::new(1000.0, 250.0)
            }
        );
        // Back to the small viewport where 1.5 is the zoom level.
        let view = ViewState::Zoomed {
            scale: 2.5,
            offset: Vec2::new(1900.0, 0.0),
        }
        .relayout(&layout);
        assert_eq!(
            view,
            ViewState::Zoomed {
                scale: 1.5,
                offset: Vec2::new(1000.0, 0.0)
            }
        );
        assert!(view.satisfies_invariants(&layout));
    }
}
