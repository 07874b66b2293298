// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed drag velocity, in pixels per millisecond.
//!
//! Pointer samples arrive at irregular intervals, so each instantaneous
//! velocity is blended into a running estimate with a fixed weight rather
//! than used directly.

use kurbo::Vec2;

/// Running velocity estimate for an active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityEstimate {
    velocity: Vec2,
    last_time: Option<f64>,
    weight: f64,
}

impl Default for VelocityEstimate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WEIGHT)
    }
}

impl VelocityEstimate {
    /// Weight given to each new sample (the previous estimate keeps the rest).
    pub const DEFAULT_WEIGHT: f64 = 0.3;

    /// Creates an estimate that blends new samples with `weight`.
    ///
    /// `weight` is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Self {
            velocity: Vec2::ZERO,
            last_time: None,
            weight: if weight.is_nan() { Self::DEFAULT_WEIGHT } else { weight.clamp(0.0, 1.0) },
        }
    }

    /// Clears the estimate and forgets the last sample time.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.last_time = None;
    }

    /// Clears the estimate and starts timing from `time_ms`.
    pub fn reset_at(&mut self, time_ms: f64) {
        self.velocity = Vec2::ZERO;
        self.last_time = Some(time_ms);
    }

    /// Blends in a movement of `delta` pixels observed at `time_ms`.
    ///
    /// Samples without a previous timestamp only record the time. Samples
    /// whose elapsed time is zero or negative are skipped entirely. Returns
    /// `true` if the estimate changed.
    pub fn sample(&mut self, delta: Vec2, time_ms: f64) -> bool {
        let Some(last) = self.last_time else {
            self.last_time = Some(time_ms);
            return false;
        };
        let dt = time_ms - last;
        if dt <= 0.0 || !dt.is_finite() {
            return false;
        }
        let instant = delta / dt;
        self.velocity = self.velocity * (1.0 - self.weight) + instant * self.weight;
        self.last_time = Some(time_ms);
        true
    }

    /// Current velocity in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current speed in pixels per millisecond.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.hypot()
    }

    /// Timestamp of the last accepted sample.
    #[must_use]
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::VelocityEstimate;

    #[test]
    fn blends_seventy_thirty() {
        let mut v = VelocityEstimate::default();
        v.reset_at(0.0);

        assert!(v.sample(Vec2::new(10.0, 0.0), 10.0));
        assert!((v.velocity().x - 0.3).abs() < 1e-12);

        assert!(v.sample(Vec2::new(10.0, 0.0), 20.0));
        // 0.7 * 0.3 + 0.3 * 1.0
        assert!((v.velocity().x - 0.51).abs() < 1e-12);
        assert_eq!(v.velocity().y, 0.0);
    }

    #[test]
    fn duplicate_timestamps_are_skipped() {
        let mut v = VelocityEstimate::default();
        v.reset_at(5.0);
        assert!(v.sample(Vec2::new(4.0, 4.0), 7.0));
        let before = v.velocity();

        assert!(!v.sample(Vec2::new(100.0, 100.0), 7.0));
        assert!(!v.sample(Vec2::new(100.0, 100.0), 6.0));
        assert_eq!(v.velocity(), before);
        assert_eq!(v.last_time(), Some(7.0));
    }

    #[test]
    fn first_sample_without_time_only_records() {
        let mut v = VelocityEstimate::default();
        assert!(!v.sample(Vec2::new(50.0, 0.0), 100.0));
        assert_eq!(v.velocity(), Vec2::ZERO);
        assert_eq!(v.last_time(), Some(100.0));
    }

    #[test]
    fn reset_clears_everything() {
        let mut v = VelocityEstimate::new(1.0);
        v.reset_at(0.0);
        v.sample(Vec2::new(3.0, 4.0), 1.0);
        assert!((v.speed() - 5.0).abs() < 1e-12);

        v.reset();
        assert_eq!(v.speed(), 0.0);
        assert_eq!(v.last_time(), None);
    }
}
