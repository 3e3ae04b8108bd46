// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_view --heading-base-level=0

//! Understory Zoom View: a headless zoom/pan controller for a single image.
//!
//! Given fixed-size content shown inside a resizable viewport, this crate
//! turns recognized touch gestures into a scale and a pan offset. It has two
//! named magnification levels:
//! - the **fit** level, where the whole content is visible, letterboxed on
//!   one axis;
//! - the **zoom** level, which fills the other axis and then applies an
//!   extra magnification (1.5× by default).
//!
//! It focuses on:
//! - Deriving both levels and the legal pan range from the sizes
//!   ([`ScaleGeometry`], [`PanBounds`], [`Layout`]).
//! - A tagged fitted/zoomed/animating state machine with a double-tap toggle
//!   that keeps the tapped point under the finger ([`ViewState`]).
//! - Pure reduction of drags, pinches, flings and double taps
//!   ([`reduce`], [`Gesture`]), with hard clamping at both levels.
//! - A render transform with view ↔ content conversion ([`ViewTransform`]).
//!
//! It does **not** recognize gestures, schedule frames, ease animations,
//! integrate fling friction, or draw pixels. Callers are expected to:
//! - Feed already-classified gestures in viewport-local coordinates.
//! - Provide a [`ScaleAnimator`] and an [`InertiaSimulator`]; both are polled
//!   once per frame through [`ZoomController::on_frame`].
//! - Apply [`ViewTransform::to_affine`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom_view::{Layout, ViewState, ViewTransform, ZoomConfig};
//!
//! // A 2000x1000 image in a 1000x1000 view.
//! let layout = Layout::new(
//!     Size::new(2000.0, 1000.0),
//!     Size::new(1000.0, 1000.0),
//!     &ZoomConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(layout.geometry().fit_scale(), 0.5);
//! assert_eq!(layout.geometry().zoom_scale(), 1.5);
//!
//! // Double tap right of center, then let the animation complete.
//! let (view, _command) = ViewState::Fitted.toggle_at(&layout, Point::new(600.0, 500.0));
//! let view = view.finish(&layout);
//! assert!(view.is_zoomed());
//!
//! let transform = ViewTransform::new(&view, &layout);
//! assert_eq!(transform.scale, 1.5);
//! ```
//!
//! ## Design notes
//!
//! - Scale is the single source of truth for magnification. The pan offset is
//!   expressed at the zoom level; the rendered translation is the offset
//!   weighted by how far the scale is between the two levels, so offset and
//!   scale animate together during a double-tap transition.
//! - Pan bounds are always computed at the zoom level, never at the current
//!   scale.
//! - At most one continuous driver (fling or zoom animation) is active; any
//!   competing gesture pre-empts it.
//!
//! With the `log` feature, state transitions are reported at debug level
//! through the `log` facade.
//!
//! This crate is `no_std`.

#![no_std]

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

mod bounds;
mod config;
mod controller;
mod driver;
mod geometry;
mod gesture;
mod layout;
mod state;
mod transform;

pub use bounds::PanBounds;
pub use config::{DEFAULT_EXTRA_SCALE_FACTOR, ZoomConfig};
pub use controller::{Response, ZoomController};
pub use driver::{AnimationCommand, DriverSlot, FlingRequest, InertiaSimulator, ScaleAnimator};
pub use geometry::{GeometryError, ScaleGeometry};
pub use gesture::{Effects, Gesture, Reduction, ZoomModel, animation_step, fling_step, reduce};
pub use layout::Layout;
pub use state::{ViewState, ZoomAnimation, ZoomLevel};
pub use transform::ViewTransform;
