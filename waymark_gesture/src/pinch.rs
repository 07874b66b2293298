// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom geometry shared by touch surfaces.

use kurbo::Point;

/// Returns `(centroid, distance)` for the first two touches.
///
/// Returns `None` when fewer than two touches are given. Extra touches
/// beyond the second are ignored.
#[must_use]
pub fn two_finger_geometry(touches: &[Point]) -> Option<(Point, f64)> {
    match touches {
        [a, b, ..] => Some((a.midpoint(*b), a.distance(*b))),
        _ => None,
    }
}

/// Snapshot taken when a two-finger gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStart {
    /// Pixel distance between the two touches at gesture start.
    pub start_distance: f64,
    /// Transform scale at gesture start.
    pub start_scale: f64,
    /// Most recent centroid of the two touches.
    pub center: Point,
}

impl PinchStart {
    /// Captures a pinch baseline from two touches.
    ///
    /// Returns `None` if the touches are closer than `min_distance` (or the
    /// distance is not finite), since the scale ratio would be unstable.
    #[must_use]
    pub fn new(touches: [Point; 2], start_scale: f64, min_distance: f64) -> Option<Self> {
        let (center, start_distance) = two_finger_geometry(&touches)?;
        if !start_distance.is_finite() || start_distance < min_distance.max(f64::MIN_POSITIVE) {
            return None;
        }
        Some(Self {
            start_distance,
            start_scale,
            center,
        })
    }

    /// Unclamped scale for the current finger distance.
    #[must_use]
    pub fn target_scale(&self, distance: f64) -> f64 {
        self.start_scale * (distance / self.start_distance)
    }
}

/// Result of one pinch move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Requested (unclamped) scale.
    pub scale: f64,
    /// Current centroid; the zoom anchor for this step.
    pub center: Point,
}
