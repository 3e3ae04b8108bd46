// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure reduction of recognized gestures and driver samples onto a [`ZoomModel`].
//!
//! Every function here takes the current model by value and returns a
//! [`Reduction`]: the next model, the [`Effects`] the host must carry out on
//! its drivers, and whether the event was consumed. Nothing here touches a
//! driver directly; [`crate::ZoomController`] does that.

use kurbo::{Point, Vec2};

use crate::driver::{AnimationCommand, DriverSlot, FlingRequest};
use crate::layout::Layout;
use crate::state::ViewState;

/// A gesture already classified by the platform recognizer.
///
/// All positions are in viewport-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Scroll by `delta`; the delta is subtracted from the pan offset.
    Drag(Vec2),
    /// A pinch starts with its focal point.
    PinchBegin(Point),
    /// Incremental pinch scale factor since the previous update.
    PinchUpdate(f64),
    /// The pinch gesture ended.
    PinchEnd,
    /// A confirmed double tap.
    DoubleTap(Point),
    /// A fling with the given velocity.
    FlingStart(Vec2),
    /// Single tap released. Not consumed.
    TapUp(Point),
    /// Press held briefly. Not consumed.
    ShowPress(Point),
    /// Long press. Not consumed.
    LongPress(Point),
}

/// Everything the reducer tracks between events.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ZoomModel {
    /// Scale, offset and fitted/zoomed state.
    pub view: ViewState,
    /// A pinch session is in progress; drags are rejected until it ends.
    pub pinching: bool,
    /// The continuous driver currently allowed to mutate `view`.
    pub driver: DriverSlot,
}

/// Side effects requested by a reduction, in the order the host applies them.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Effects {
    /// Abort the inertia simulator.
    pub stop_fling: bool,
    /// Cancel the scale animator.
    pub stop_animation: bool,
    /// Start the inertia simulator.
    pub fling: Option<FlingRequest>,
    /// Start or reverse the scale animator.
    pub animation: Option<AnimationCommand>,
    /// The rendered transform changed.
    pub redraw: bool,
}

/// Result of one reducer step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reduction {
    /// The next model.
    pub model: ZoomModel,
    /// Driver commands and redraw request.
    pub effects: Effects,
    /// Whether the event was consumed. A rejected pinch update reports
    /// `false` so the recognizer can treat the residual motion as inert.
    pub handled: bool,
}

impl Reduction {
    fn unchanged(model: ZoomModel) -> Self {
        Self {
            model,
            effects: Effects::default(),
            handled: false,
        }
    }

    fn stop_fling(&mut self) {
        if self.model.driver == DriverSlot::Fling {
            debug_event!("fling pre-empted");
            self.effects.stop_fling = true;
            self.model.driver = DriverSlot::Idle;
        }
    }

    /// Stops whichever driver is running, freezing an animation where it is.
    fn preempt(&mut self, layout: &Layout) {
        match self.model.driver {
            DriverSlot::Idle => {}
            DriverSlot::Fling => self.stop_fling(),
            DriverSlot::Animation => {
                debug_event!("zoom animation pre-empted");
                self.effects.stop_animation = true;
                self.model.driver = DriverSlot::Idle;
                self.model.view = self.model.view.settle(layout);
            }
        }
    }
}

/// Applies one recognized gesture.
#[must_use]
pub fn reduce(model: ZoomModel, layout: &Layout, gesture: Gesture) -> Reduction {
    let mut r = Reduction::unchanged(model);
    match gesture {
        Gesture::Drag(delta) => drag(&mut r, layout, delta),
        Gesture::PinchBegin(focus) => pinch_begin(&mut r, layout, focus),
        Gesture::PinchUpdate(factor) => pinch_update(&mut r, layout, factor),
        Gesture::PinchEnd => {
            r.model.pinching = false;
            r.handled = true;
        }
        Gesture::DoubleTap(point) => double_tap(&mut r, layout, point),
        Gesture::FlingStart(velocity) => fling_start(&mut r, layout, velocity),
        Gesture::TapUp(_) | Gesture::ShowPress(_) | Gesture::LongPress(_) => {}
    }
    debug_assert!(
        r.model.view.satisfies_invariants(layout),
        "view state escaped its bounds: {:?}",
        r.model.view
    );
    r
}

fn drag(r: &mut Reduction, layout: &Layout, delta: Vec2) {
    if r.model.pinching {
        return;
    }
    let Some(view) = r.model.view.pan_by(layout, delta) else {
        return;
    };
    r.stop_fling();
    r.model.view = view;
    r.effects.redraw = true;
    r.handled = true;
}

fn pinch_begin(r: &mut Reduction, layout: &Layout, focus: Point) {
    r.model.pinching = true;
    r.preempt(layout);
    // Only re-anchor when the pinch picks up mid-range; at either level the
    // previous anchor still holds.
    if let ViewState::Zoomed { scale, .. } = r.model.view
        && layout.geometry().is_intermediate(scale)
    {
        r.model.view = ViewState::Zoomed {
            scale,
            offset: layout.anchor_offset(focus),
        };
        r.effects.redraw = true;
    }
    r.handled = true;
}

fn pinch_update(r: &mut Reduction, layout: &Layout, factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        return;
    }
    r.preempt(layout);

    let geometry = layout.geometry();
    let current = r.model.view.scale(geometry);
    let tentative = current * factor;
    let target = if tentative > geometry.zoom_scale() {
        if current >= geometry.zoom_scale() {
            debug_event!("pinch rejected above zoom level");
            return;
        }
        geometry.zoom_scale()
    } else if tentative < geometry.fit_scale() {
        if current <= geometry.fit_scale() {
            debug_event!("pinch rejected below fit level");
            return;
        }
        geometry.fit_scale()
    } else {
        tentative
    };

    r.model.view = ViewState::zoomed_at(target, r.model.view.offset(), layout);
    r.effects.redraw = true;
    r.handled = true;
}

fn double_tap(r: &mut Reduction, layout: &Layout, point: Point) {
    r.stop_fling();
    let (view, command) = r.model.view.toggle_at(layout, point);
    debug_event!("double tap at {:?}: {:?}", point, command);
    r.model.view = view;
    r.model.driver = DriverSlot::Animation;
    r.effects.animation = Some(command);
    r.effects.redraw = true;
    r.handled = true;
}

fn fling_start(r: &mut Reduction, layout: &Layout, velocity: Vec2) {
    let ViewState::Zoomed { offset, .. } = r.model.view else {
        return;
    };
    if r.model.driver == DriverSlot::Animation {
        return;
    }
    debug_event!("fling from {:?} at {:?}", offset, velocity);
    r.model.driver = DriverSlot::Fling;
    r.effects.fling = Some(FlingRequest {
        start: offset.to_point(),
        velocity,
        bounds: *layout.bounds(),
    });
    r.handled = true;
}

/// Applies one inertia simulator step. `None` means the fling came to rest.
///
/// Ignored unless the fling driver is active, so a pre-empted fling can never
/// move the view again.
#[must_use]
pub fn fling_step(model: ZoomModel, layout: &Layout, position: Option<Point>) -> Reduction {
    let mut r = Reduction::unchanged(model);
    if model.driver != DriverSlot::Fling {
        return r;
    }
    match (position, model.view) {
        (Some(position), ViewState::Zoomed { .. }) => {
            r.model.view = model.view.with_offset(layout, position.to_vec2());
            r.effects.redraw = true;
        }
        (Some(_), _) => {
            r.effects.stop_fling = true;
            r.model.driver = DriverSlot::Idle;
        }
        (None, _) => {
            debug_event!("fling finished");
            r.model.driver = DriverSlot::Idle;
        }
    }
    r.handled = true;
    r
}

/// Applies one animator sample. `None` means the animation completed.
///
/// Ignored unless the animation driver is active.
#[must_use]
pub fn animation_step(model: ZoomModel, layout: &Layout, value: Option<f64>) -> Reduction {
    let mut r = Reduction::unchanged(model);
    if model.driver != DriverSlot::Animation {
        return r;
    }
    match value {
        Some(value) => r.model.view = model.view.sample(layout, value),
        None => {
            r.model.view = model.view.finish(layout);
            r.model.driver = DriverSlot::Idle;
            debug_event!("zoom animation finished: {:?}", r.model.view);
        }
    }
    r.effects.redraw = true;
    r.handled = true;
    r
}
