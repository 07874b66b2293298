// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-release momentum with frame-rate independent decay.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

/// Decay parameters for an [`InertiaRun`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaParams {
    /// Velocity retained per reference frame.
    pub friction: f64,
    /// Reference frame duration in milliseconds.
    pub reference_frame_ms: f64,
    /// Speed (px/ms) under which the run stops.
    pub min_speed: f64,
}

impl InertiaParams {
    /// Highest friction accepted.
    pub const MAX_FRICTION: f64 = 0.99;
    /// Lowest stop threshold accepted, in px/ms.
    pub const MIN_STOP_SPEED: f64 = 1e-4;

    const DEFAULT_FRICTION: f64 = 0.95;
    const DEFAULT_REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Brings every parameter into the range where a run always settles.
    ///
    /// Friction is clamped to `[0, MAX_FRICTION]`, the stop threshold is at
    /// least [`Self::MIN_STOP_SPEED`], and a non-positive or non-finite
    /// reference frame falls back to 60 Hz.
    #[must_use]
    pub fn normalized(self) -> Self {
        let friction = if self.friction.is_nan() {
            Self::DEFAULT_FRICTION
        } else {
            self.friction.clamp(0.0, Self::MAX_FRICTION)
        };
        let frame = self.reference_frame_ms;
        let reference_frame_ms = if frame > 0.0 && frame.is_finite() {
            frame
        } else {
            Self::DEFAULT_REFERENCE_FRAME_MS
        };
        let min_speed = if self.min_speed.is_nan() {
            Self::MIN_STOP_SPEED
        } else {
            self.min_speed.max(Self::MIN_STOP_SPEED)
        };
        Self {
            friction,
            reference_frame_ms,
            min_speed,
        }
    }
}

/// Outcome of one simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaStep {
    /// Distance to pan by, in view pixels.
    pub displacement: Vec2,
    /// `true` once speed has dropped under the threshold.
    pub finished: bool,
}

/// An active momentum simulation seeded from a drag release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaRun {
    velocity: Vec2,
    last_time: f64,
    params: InertiaParams,
}

impl InertiaRun {
    /// Starts a run at `time_ms` with `velocity` in px/ms.
    ///
    /// Returns `None` when the release is too slow to count as a fling.
    /// `params` are [normalized](InertiaParams::normalized) first.
    #[must_use]
    pub fn start(velocity: Vec2, time_ms: f64, params: InertiaParams) -> Option<Self> {
        let params = params.normalized();
        let speed = velocity.hypot();
        if !speed.is_finite() || speed < params.min_speed {
            return None;
        }
        Some(Self {
            velocity,
            last_time: time_ms,
            params,
        })
    }

    /// Advances the simulation to `now_ms`.
    ///
    /// Moves by the current velocity over the elapsed time, then decays the
    /// velocity by `friction^(dt / reference_frame_ms)`. Steps with no elapsed
    /// time move nothing.
    pub fn step(&mut self, now_ms: f64) -> InertiaStep {
        let dt = now_ms - self.last_time;
        let displacement = if dt > 0.0 && dt.is_finite() {
            self.last_time = now_ms;
            let moved = self.velocity * dt;
            let frames = dt / self.params.reference_frame_ms;
            self.velocity *= self.params.friction.powf(frames);
            moved
        } else {
            Vec2::ZERO
        };
        InertiaStep {
            displacement,
            finished: self.is_settled(),
        }
    }

    /// Current velocity in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current speed in px/ms.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.hypot()
    }

    /// Returns `true` once speed is under the threshold.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let speed = self.speed();
        speed.is_nan() || speed < self.params.min_speed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{InertiaParams, InertiaRun};

    const PARAMS: InertiaParams = InertiaParams {
        friction: 0.95,
        reference_frame_ms: 16.0,
        min_speed: 0.02,
    };

    #[test]
    fn slow_release_is_not_a_fling() {
        assert!(InertiaRun::start(Vec2::new(0.01, 0.01), 0.0, PARAMS).is_none());
        assert!(InertiaRun::start(Vec2::new(f64::NAN, 0.0), 0.0, PARAMS).is_none());
        assert!(InertiaRun::start(Vec2::new(0.5, 0.0), 0.0, PARAMS).is_some());
    }

    #[test]
    fn decay_is_frame_rate_independent() {
        let mut coarse = InertiaRun::start(Vec2::new(1.0, 0.0), 0.0, PARAMS).unwrap();
        let mut fine = coarse;

        coarse.step(64.0);
        for i in 1..=8 {
            fine.step(f64::from(i) * 8.0);
        }
        let expected = 0.95_f64.powi(4);
        assert!((coarse.speed() - expected).abs() < 1e-12);
        assert!((fine.speed() - expected).abs() < 1e-12);
    }

    #[test]
    fn step_moves_before_decaying() {
        let mut run = InertiaRun::start(Vec2::new(0.5, -0.25), 100.0, PARAMS).unwrap();
        let step = run.step(116.0);
        assert_eq!(step.displacement, Vec2::new(8.0, -4.0));
        assert!(!step.finished);
        assert!((run.velocity().x - 0.475).abs() < 1e-12);
    }

    #[test]
    fn zero_elapsed_time_moves_nothing() {
        let mut run = InertiaRun::start(Vec2::new(1.0, 0.0), 50.0, PARAMS).unwrap();
        let step = run.step(50.0);
        assert_eq!(step.displacement, Vec2::ZERO);
        assert_eq!(run.speed(), 1.0);
        let step = run.step(40.0);
        assert_eq!(step.displacement, Vec2::ZERO);
    }

    #[test]
    fn out_of_range_params_are_normalized() {
        let wild = InertiaParams {
            friction: 1.5,
            reference_frame_ms: -16.0,
            min_speed: 0.0,
        }
        .normalized();
        assert_eq!(wild.friction, InertiaParams::MAX_FRICTION);
        assert!((wild.reference_frame_ms - 1000.0 / 60.0).abs() < 1e-12);
        assert_eq!(wild.min_speed, InertiaParams::MIN_STOP_SPEED);

        let nan = InertiaParams {
            friction: f64::NAN,
            reference_frame_ms: f64::INFINITY,
            min_speed: f64::NAN,
        }
        .normalized();
        assert_eq!(nan.friction, 0.95);
        assert_eq!(nan.min_speed, InertiaParams::MIN_STOP_SPEED);
        assert_eq!(PARAMS.normalized(), PARAMS);
    }

    #[test]
    fn frictionless_run_still_settles() {
        let params = InertiaParams {
            friction: 1.0,
            reference_frame_ms: 16.0,
            min_speed: 0.0,
        };
        let mut run = InertiaRun::start(Vec2::new(2.0, 0.0), 0.0, params).unwrap();
        let mut now = 0.0;
        let mut steps = 0;
        while !run.step(now + 16.0).finished {
            now += 16.0;
            steps += 1;
            assert!(steps < 10_000, "inertia never settled");
        }
    }

    #[test]
    fn run_terminates() {
        let mut run = InertiaRun::start(Vec2::new(2.0, 2.0), 0.0, PARAMS).unwrap();
        let mut now = 0.0;
        let mut steps = 0;
        loop {
            now += 16.0;
            steps += 1;
            if run.step(now).finished {
                break;
            }
            assert!(steps < 1_000, "inertia never settled");
        }
        assert!(run.speed() < PARAMS.min_speed);
        // 2.83 * 0.95^n < 0.02  =>  n = 97
        assert_eq!(steps, 97);
    }
}
