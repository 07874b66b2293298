// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: idle, single-pointer drag, and two-finger pinch.
//!
//! ## Usage
//!
//! 1) Start a drag with [`GestureState::begin_drag`] on pointer-down or a
//!    single touch, or a pinch with [`GestureState::begin_pinch`] when a
//!    second finger lands.
//! 2) On each move, call [`GestureState::drag_to`] or
//!    [`GestureState::pinch_to`] to get the movement delta or pinch target.
//!    Each returns `None` when the call does not match the active gesture.
//! 3) End with [`GestureState::end`], which reports what was active.
//!
//! Dropping from two fingers to one ends the pinch; it never turns back into
//! a drag on its own, so the remaining finger cannot cause a position jump.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use waymark_gesture::{GesturePhase, GestureState};
//!
//! let mut gesture = GestureState::default();
//!
//! gesture.begin_drag(Point::new(10.0, 20.0));
//! assert!(gesture.is_dragging());
//!
//! let delta = gesture.drag_to(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! assert_eq!(gesture.end(), GesturePhase::Dragging);
//! assert_eq!(gesture.phase(), GesturePhase::Idle);
//! ```

use kurbo::{Point, Vec2};

use crate::pinch::{PinchStart, PinchStep, two_finger_geometry};

/// Discriminant of a [`GestureState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A single pointer or finger is panning.
    Dragging,
    /// Two fingers are zooming.
    Pinching,
}

/// The active gesture, if any.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Single-pointer pan.
    Dragging {
        /// Last recorded pointer position.
        last: Point,
    },
    /// Two-finger zoom.
    Pinching(PinchStart),
}

impl GestureState {
    /// Starts a drag at `pos`, replacing any active gesture.
    pub fn begin_drag(&mut self, pos: Point) {
        *self = Self::Dragging { last: pos };
    }

    /// Moves the drag to `pos`, returning the delta since the last position.
    ///
    /// Returns `None` unless a drag is active.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Starts a pinch from two touches, replacing any active gesture.
    ///
    /// Returns `false` and leaves the state unchanged if the fingers are
    /// closer than `min_distance`.
    pub fn begin_pinch(&mut self, touches: [Point; 2], scale: f64, min_distance: f64) -> bool {
        match PinchStart::new(touches, scale, min_distance) {
            Some(start) => {
                *self = Self::Pinching(start);
                true
            }
            None => false,
        }
    }

    /// Updates the pinch with the current touches.
    ///
    /// Returns the unclamped target scale and the current centroid, or `None`
    /// unless a pinch is active.
    pub fn pinch_to(&mut self, touches: [Point; 2]) -> Option<PinchStep> {
        let Self::Pinching(start) = self else {
            return None;
        };
        let (center, distance) = two_finger_geometry(&touches)?;
        start.center = center;
        Some(PinchStep {
            scale: start.target_scale(distance),
            center,
        })
    }

    /// Ends the active gesture and returns which phase it was in.
    pub fn end(&mut self) -> GesturePhase {
        let phase = self.phase();
        *self = Self::Idle;
        phase
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Idle => GesturePhase::Idle,
            Self::Dragging { .. } => GesturePhase::Dragging,
            Self::Pinching(_) => GesturePhase::Pinching,
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let gesture = GestureState::default();
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert!(!gesture.is_dragging());
        assert!(!gesture.is_pinching());
    }

    #[test]
    fn drag_tracks_incremental_deltas() {
        let mut gesture = GestureState::default();
        gesture.begin_drag(Point::new(0.0, 0.0));

        assert_eq!(gesture.drag_to(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(gesture.drag_to(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(gesture.drag_to(Point::new(2.0, 1.0)), Some(Vec2::new(-6.0, -6.0)));
    }

    #[test]
    fn drag_to_is_ignored_when_not_dragging() {
        let mut gesture = GestureState::default();
        assert_eq!(gesture.drag_to(Point::new(15.0, 25.0)), None);

        gesture.begin_pinch([Point::new(0.0, 0.0), Point::new(50.0, 0.0)], 1.0, 10.0);
        assert_eq!(gesture.drag_to(Point::new(15.0, 25.0)), None);
        assert!(gesture.is_pinching());
    }

    #[test]
    fn second_finger_turns_drag_into_pinch() {
        let mut gesture = GestureState::default();
        gesture.begin_drag(Point::new(0.0, 0.0));
        assert!(gesture.begin_pinch([Point::new(0.0, 0.0), Point::new(100.0, 0.0)], 1.5, 10.0));
        assert_eq!(gesture.phase(), GesturePhase::Pinching);
    }

    #[test]
    fn close_fingers_do_not_start_pinch() {
        let mut gesture = GestureState::default();
        gesture.begin_drag(Point::new(1.0, 1.0));
        assert!(!gesture.begin_pinch([Point::new(0.0, 0.0), Point::new(0.0, 0.0)], 1.0, 10.0));
        assert!(gesture.is_dragging());
    }

    #[test]
    fn pinch_reports_scale_and_center() {
        let mut gesture = GestureState::default();
        gesture.begin_pinch([Point::new(0.0, 0.0), Point::new(100.0, 0.0)], 1.0, 10.0);

        let step = gesture.pinch_to([Point::new(0.0, 0.0), Point::new(200.0, 0.0)]).unwrap();
        assert_eq!(step.scale, 2.0);
        assert_eq!(step.center, Point::new(100.0, 0.0));

        // The baseline stays put; only the center follows the fingers.
        let step = gesture.pinch_to([Point::new(0.0, 0.0), Point::new(50.0, 0.0)]).unwrap();
        assert_eq!(step.scale, 0.5);
        let GestureState::Pinching(start) = gesture else {
            panic!("expected pinch");
        };
        assert_eq!(start.start_distance, 100.0);
        assert_eq!(start.center, Point::new(25.0, 0.0));
    }

    #[test]
    fn end_reports_phase_and_resets() {
        let mut gesture = GestureState::default();
        assert_eq!(gesture.end(), GesturePhase::Idle);

        gesture.begin_pinch([Point::new(0.0, 0.0), Point::new(100.0, 0.0)], 1.0, 10.0);
        assert_eq!(gesture.end(), GesturePhase::Pinching);
        assert_eq!(gesture, GestureState::Idle);
        assert_eq!(gesture.pinch_to([Point::new(0.0, 0.0), Point::new(1.0, 0.0)]), None);
    }

    #[test]
    fn begin_drag_overwrites_previous_drag() {
        let mut gesture = GestureState::default();
        gesture.begin_drag(Point::new(0.0, 0.0));
        gesture.drag_to(Point::new(10.0, 10.0));

        gesture.begin_drag(Point::new(50.0, 60.0));
        assert_eq!(gesture.drag_to(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }
}
