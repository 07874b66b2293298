// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Pan/Zoom: a gesture-driven viewport transform controller.
//!
//! [`PanZoomController`] keeps a map image (or any content layer) covering a
//! fixed-size viewport while the user drags, pinches, scrolls and flings it.
//! It combines:
//!
//! - `waymark_view` for cover-fit bounds and the bounded update,
//! - `waymark_gesture` for drag/pinch state and velocity estimation,
//! - `waymark_timing` for per-frame coalescing and revocable inertia steps,
//!
//! and adds wheel zoom and frame-rate independent inertia on top.
//!
//! ## Driving the controller
//!
//! The controller is headless and single-threaded. The host:
//!
//! 1. Calls [`PanZoomController::initialize`] once the viewport size and the
//!    content's natural size are known.
//! 2. Forwards pointer, touch, wheel, resize and load events, either through
//!    the individual methods or as [`InputEvent`]s.
//! 3. On each animation frame, calls [`PanZoomController::on_frame`] and
//!    renders the returned [`Transform`], if any. While
//!    [`PanZoomController::wants_frame`] is `true` it keeps requesting frames.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use waymark_panzoom::{InputEvent, LayoutMode, PanZoomController};
//!
//! let mut map = PanZoomController::default();
//! map.initialize(
//!     Size::new(800.0, 600.0),
//!     Size::new(1600.0, 900.0),
//!     LayoutMode::from_window_width(1280.0, LayoutMode::DEFAULT_BREAKPOINT),
//! );
//!
//! map.handle_event(InputEvent::Wheel {
//!     position: Point::new(400.0, 300.0),
//!     delta_y: -100.0,
//! });
//!
//! let mut now = 0.0;
//! while map.wants_frame() {
//!     now += 16.0;
//!     if let Some(transform) = map.on_frame(now) {
//!         // e.g. `style.transform = transform.css().to_string()`
//!         let _css = transform.css();
//!     }
//! }
//! assert!(map.published().unwrap().scale > 2.0 / 3.0);
//! ```
//!
//! ## Guarantees
//!
//! - Every published transform has its scale within the bounds and fully
//!   covers the viewport.
//! - At most one bounded update runs per frame, however many events arrived.
//! - Starting any gesture, a wheel zoom, a resize or a content reload revokes
//!   the pending inertia step; a revoked step never runs.
//! - Degenerate geometry leaves the controller inert rather than failing.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod event;
mod inertia;

pub use config::PanZoomConfig;
pub use controller::{PanZoomController, PanZoomDebugInfo};
pub use event::InputEvent;
pub use inertia::{InertiaParams, InertiaRun, InertiaStep};
pub use waymark_gesture::{GesturePhase, GestureState};
pub use waymark_view::{LayoutMode, ScaleBounds, Transform};
