// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::config::ZoomConfig;
use crate::driver::{AnimationCommand, DriverSlot, InertiaSimulator, ScaleAnimator};
use crate::geometry::GeometryError;
use crate::gesture::{Gesture, Reduction, ZoomModel, animation_step, fling_step, reduce};
use crate::layout::Layout;
use crate::state::ViewState;
use crate::transform::ViewTransform;

/// Outcome of feeding one gesture to a [`ZoomController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Response {
    /// Whether the gesture was consumed.
    pub handled: bool,
    /// Whether the host should redraw.
    pub redraw: bool,
}

/// Host-facing zoom/pan controller for one image.
///
/// `ZoomController` owns the [`ZoomModel`], the current [`Layout`], and the
/// two continuous drivers. It runs the pure reducer ([`crate::reduce`] and its
/// driver-step counterparts) and carries out the resulting effects on the
/// drivers.
///
/// Typical wiring:
/// - call [`ZoomController::set_content`] when an image loads and
///   [`ZoomController::set_viewport`] on every layout pass;
/// - forward recognized gestures to [`ZoomController::handle`];
/// - call [`ZoomController::on_frame`] every animation frame while
///   [`ZoomController::needs_frames`] is `true`;
/// - render with [`ZoomController::current_transform`].
#[derive(Clone, Debug)]
pub struct ZoomController<A, I> {
    config: ZoomConfig,
    content: Option<Size>,
    viewport: Option<Size>,
    layout: Option<Layout>,
    model: ZoomModel,
    animator: A,
    simulator: I,
}

impl<A: ScaleAnimator, I: InertiaSimulator> ZoomController<A, I> {
    /// Creates a controller with no content and no viewport yet.
    #[must_use]
    pub fn new(config: ZoomConfig, animator: A, simulator: I) -> Self {
        Self {
            config,
            content: None,
            viewport: None,
            layout: None,
            model: ZoomModel::default(),
            animator,
            simulator,
        }
    }

    /// Returns the current config.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Replaces the config and re-runs layout.
    ///
    /// # Errors
    ///
    /// See [`ZoomController::set_viewport`].
    pub fn set_config(&mut self, config: ZoomConfig) -> Result<bool, GeometryError> {
        if self.config == config {
            return Ok(false);
        }
        self.config = config;
        self.relayout()
    }

    /// Sets the content size. A new image always starts fitted.
    ///
    /// # Errors
    ///
    /// See [`ZoomController::set_viewport`].
    pub fn set_content(&mut self, content: Size) -> Result<bool, GeometryError> {
        self.stop_drivers();
        self.model = ZoomModel::default();
        self.layout = None;
        self.content = Some(content);
        self.relayout()
    }

    /// Sets the viewport size after a layout pass.
    ///
    /// Recomputes scale levels and pan bounds and clamps the current view into
    /// them. Returns `Ok(true)` when a redraw is needed and `Ok(false)` when
    /// nothing changed or no content has been set yet.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] for degenerate sizes. The controller then
    /// has no layout: [`ZoomController::current_transform`] returns `None`
    /// and gestures are ignored until a valid layout pass.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<bool, GeometryError> {
        if self.viewport == Some(viewport) && self.layout.is_some() {
            return Ok(false);
        }
        self.viewport = Some(viewport);
        self.relayout()
    }

    fn relayout(&mut self) -> Result<bool, GeometryError> {
        let (Some(content), Some(viewport)) = (self.content, self.viewport) else {
            return Ok(false);
        };
        let layout = match Layout::new(content, viewport, &self.config) {
            Ok(layout) => layout,
            Err(err) => {
                debug_event!("layout rejected: {}", err);
                self.stop_drivers();
                self.model = ZoomModel::default();
                self.layout = None;
                return Err(err);
            }
        };

        let geometry = layout.geometry();
        self.animator.set_range(geometry.fit_scale(), geometry.zoom_scale());
        // The running fling was started against the old envelope.
        if self.model.driver == DriverSlot::Fling {
            self.simulator.abort();
            self.model.driver = DriverSlot::Idle;
        }
        self.model.view = match self.layout {
            Some(_) => self.model.view.relayout(&layout),
            None => ViewState::Fitted,
        };
        debug_event!(
            "layout: fit {} zoom {} bounds {:?}",
            geometry.fit_scale(),
            geometry.zoom_scale(),
            layout.bounds()
        );
        self.layout = Some(layout);
        Ok(true)
    }

    /// Current layout, if the last layout pass was valid.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Current view state.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.model.view
    }

    /// Current reducer model, including pinch and driver bookkeeping.
    #[must_use]
    pub fn model(&self) -> &ZoomModel {
        &self.model
    }

    /// Returns `true` when zoomed or animating toward the zoom level.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.model.view.is_zoomed()
    }

    /// Returns `true` while a double-tap transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.model.view.is_animating()
    }

    /// Returns `true` while a driver wants [`ZoomController::on_frame`] calls.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.model.driver != DriverSlot::Idle
    }

    /// Render parameters, or `None` until a valid layout exists.
    #[must_use]
    pub fn current_transform(&self) -> Option<ViewTransform> {
        self.layout
            .as_ref()
            .map(|layout| ViewTransform::new(&self.model.view, layout))
    }

    /// Feeds one recognized gesture through the reducer.
    pub fn handle(&mut self, gesture: Gesture) -> Response {
        let Some(layout) = self.layout else {
            return Response::default();
        };
        let reduction = reduce(self.model, &layout, gesture);
        self.apply(reduction)
    }

    /// Polls the active driver once. Returns `true` when a redraw is needed.
    pub fn on_frame(&mut self) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let reduction = match self.model.driver {
            DriverSlot::Idle => return false,
            DriverSlot::Fling => {
                let position = self.simulator.step();
                fling_step(self.model, &layout, position)
            }
            DriverSlot::Animation => {
                let value = self.animator.sample();
                animation_step(self.model, &layout, value)
            }
        };
        self.apply(reduction).redraw
    }

    /// Returns to the fitted state immediately, stopping any driver.
    pub fn reset(&mut self) -> bool {
        self.stop_drivers();
        let changed = self.model.view != ViewState::Fitted;
        self.model = ZoomModel::default();
        changed
    }

    /// Shared access to the animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Shared access to the inertia simulator.
    #[must_use]
    pub fn simulator(&self) -> &I {
        &self.simulator
    }

    fn stop_drivers(&mut self) {
        match self.model.driver {
            DriverSlot::Idle => {}
            DriverSlot::Fling => self.simulator.abort(),
            DriverSlot::Animation => self.animator.cancel(),
        }
        self.model.driver = DriverSlot::Idle;
    }

    fn apply(&mut self, reduction: Reduction) -> Response {
        let Reduction {
            model,
            effects,
            handled,
        } = reduction;
        if effects.stop_fling {
            self.simulator.abort();
        }
        if effects.stop_animation {
            self.animator.cancel();
        }
        if let Some(request) = effects.fling {
            self.simulator.fling(request.start, request.velocity, request.bounds);
        }
        match effects.animation {
            Some(AnimationCommand::Start) => self.animator.start(),
            Some(AnimationCommand::Reverse) => self.animator.reverse(),
            None => {}
        }
        self.model = model;
        Response {
            handled,
            redraw: effects.redraw,
        }
    }
}
