// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polling contracts for the two continuous drivers: the scale animator and
//! the inertia (fling) simulator.
//!
//! Neither driver owns a timer. The host calls [`crate::ZoomController::on_frame`]
//! once per frame and the controller polls whichever driver is active, so a
//! test can single-step both with plain fakes.

use kurbo::{Point, Vec2};

use crate::bounds::PanBounds;

/// Interpolates a scale value between two endpoints over time.
///
/// The semantics follow a typical property animator:
/// - [`ScaleAnimator::start`] plays from the `from` endpoint toward `to`.
/// - [`ScaleAnimator::reverse`] plays toward `from`; when running it turns
///   around at the current value, when idle it starts from `to`.
pub trait ScaleAnimator {
    /// Sets the two endpoints. Called on every layout pass.
    fn set_range(&mut self, from: f64, to: f64);

    /// Plays forward from `from` to `to`.
    fn start(&mut self);

    /// Plays backward toward `from`.
    fn reverse(&mut self);

    /// Advances one frame and returns the interpolated value, or `None` once
    /// the animation has finished.
    fn sample(&mut self) -> Option<f64>;

    /// Stops without reaching an endpoint.
    fn cancel(&mut self);
}

/// Integrates a fling trajectory inside a clamp envelope.
pub trait InertiaSimulator {
    /// Starts a fling at `start` with `velocity`, confined to `bounds`.
    fn fling(&mut self, start: Point, velocity: Vec2, bounds: PanBounds);

    /// Advances one frame and returns the current position, or `None` once the
    /// fling has come to rest.
    fn step(&mut self) -> Option<Point>;

    /// Stops the fling immediately.
    fn abort(&mut self);
}

/// Which continuous driver currently owns the view, if any.
///
/// At most one driver may mutate the view at a time; starting one always
/// stops the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DriverSlot {
    /// Nothing to poll.
    #[default]
    Idle,
    /// The inertia simulator is moving the offset.
    Fling,
    /// The scale animator is running a double-tap transition.
    Animation,
}

/// What the animator must do after a double tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationCommand {
    /// [`ScaleAnimator::start`]: play toward the zoom level.
    Start,
    /// [`ScaleAnimator::reverse`]: play back toward the fit level.
    Reverse,
}

/// Parameters for [`InertiaSimulator::fling`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingRequest {
    /// Current pan offset, as a point.
    pub start: Point,
    /// Fling velocity from the gesture recognizer.
    pub velocity: Vec2,
    /// Full-zoom pan range used as the clamp envelope.
    pub bounds: PanBounds,
}
