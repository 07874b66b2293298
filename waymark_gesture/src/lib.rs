// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Gesture: pan and pinch gesture state for pointer and touch input.
//!
//! This crate provides the small state machines a pan/zoom surface needs to
//! turn raw pointer and touch positions into transform updates:
//!
//! - [`gesture`]: The [`GestureState`] machine (idle, dragging, pinching)
//!   with movement deltas and pinch targets.
//! - [`pinch`]: Two-finger geometry and the pinch baseline.
//! - [`velocity`]: A smoothed velocity estimate used to seed inertia.
//!
//! ## Design Philosophy
//!
//! Each piece is designed to be:
//!
//! - **Headless**: Positions and timestamps go in, deltas and scales come out
//! - **Framework-agnostic**: No assumptions about DOM, winit, or any event type
//! - **Exclusive**: Exactly one gesture is active at a time
//!
//! Applying the results to a transform, clamping, and scheduling repaints is
//! left to the caller (see `waymark_panzoom`).
//!
//! ## Drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use waymark_gesture::{GestureState, VelocityEstimate};
//!
//! let mut gesture = GestureState::default();
//! let mut velocity = VelocityEstimate::default();
//!
//! gesture.begin_drag(Point::new(10.0, 10.0));
//! velocity.reset_at(0.0);
//!
//! let delta = gesture.drag_to(Point::new(16.0, 10.0)).unwrap();
//! assert_eq!(delta, Vec2::new(6.0, 0.0));
//! velocity.sample(delta, 4.0);
//! assert!(velocity.speed() > 0.0);
//! ```
//!
//! ## Pinch
//!
//! ```rust
//! use kurbo::Point;
//! use waymark_gesture::GestureState;
//!
//! let mut gesture = GestureState::default();
//! let started = gesture.begin_pinch(
//!     [Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
//!     1.0,
//!     10.0,
//! );
//! assert!(started);
//!
//! let step = gesture
//!     .pinch_to([Point::new(-50.0, 0.0), Point::new(150.0, 0.0)])
//!     .unwrap();
//! assert_eq!(step.scale, 2.0);
//! assert_eq!(step.center, Point::new(50.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod gesture;
pub mod pinch;
pub mod velocity;

pub use gesture::{GesturePhase, GestureState};
pub use pinch::{PinchStart, PinchStep, two_finger_geometry};
pub use velocity::VelocityEstimate;
