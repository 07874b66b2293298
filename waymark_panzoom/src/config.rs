// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning constants for a [`crate::PanZoomController`].
///
/// The defaults reproduce the behavior of the documentation site's map page.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PanZoomConfig {
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Multiple of the cover-fit scale used as the initial compact view.
    pub compact_zoom: f64,
    /// Wheel zoom sensitivity `k` in `exp(-delta_y * k)`.
    pub wheel_sensitivity: f64,
    /// Weight of each new sample in the drag velocity estimate.
    pub velocity_weight: f64,
    /// Velocity retained per reference frame during inertia, below `1.0`.
    pub friction: f64,
    /// Frame duration, in milliseconds, that `friction` is expressed against.
    pub reference_frame_ms: f64,
    /// Speed, in pixels per millisecond, under which inertia stops.
    pub min_inertia_speed: f64,
    /// Smallest finger distance, in pixels, that can start a pinch.
    pub min_pinch_distance: f64,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: 8.0,
            compact_zoom: 2.0,
            wheel_sensitivity: 0.0012,
            velocity_weight: 0.3,
            friction: 0.95,
            reference_frame_ms: 1000.0 / 60.0,
            min_inertia_speed: 0.02,
            min_pinch_distance: 10.0,
        }
    }
}

impl PanZoomConfig {
    /// Sets [`PanZoomConfig::max_scale`].
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets [`PanZoomConfig::compact_zoom`].
    #[must_use]
    pub fn with_compact_zoom(mut self, compact_zoom: f64) -> Self {
        self.compact_zoom = compact_zoom;
        self
    }

    /// Sets [`PanZoomConfig::wheel_sensitivity`].
    #[must_use]
    pub fn with_wheel_sensitivity(mut self, k: f64) -> Self {
        self.wheel_sensitivity = k;
        self
    }

    /// Sets [`PanZoomConfig::velocity_weight`].
    #[must_use]
    pub fn with_velocity_weight(mut self, weight: f64) -> Self {
        self.velocity_weight = weight;
        self
    }

    /// Sets the inertia decay: `friction` retained per `reference_frame_ms`.
    #[must_use]
    pub fn with_friction(mut self, friction: f64, reference_frame_ms: f64) -> Self {
        self.friction = friction;
        self.reference_frame_ms = reference_frame_ms;
        self
    }

    /// Sets [`PanZoomConfig::min_inertia_speed`].
    #[must_use]
    pub fn with_min_inertia_speed(mut self, speed: f64) -> Self {
        self.min_inertia_speed = speed;
        self
    }

    /// Sets [`PanZoomConfig::min_pinch_distance`].
    #[must_use]
    pub fn with_min_pinch_distance(mut self, distance: f64) -> Self {
        self.min_pinch_distance = distance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::PanZoomConfig;

    #[test]
    fn builders_override_defaults() {
        let config = PanZoomConfig::default()
            .with_max_scale(4.0)
            .with_friction(0.9, 10.0)
            .with_min_pinch_distance(2.0);
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.friction, 0.9);
        assert_eq!(config.reference_frame_ms, 10.0);
        assert_eq!(config.min_pinch_distance, 2.0);
        assert_eq!(config.wheel_sensitivity, 0.0012);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let config: PanZoomConfig = serde_json::from_str(r#"{ "max_scale": 12.0 }"#).unwrap();
        assert_eq!(config.max_scale, 12.0);
        assert_eq!(config.compact_zoom, 2.0);
        assert_eq!(config.friction, 0.95);
    }
}
