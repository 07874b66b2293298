// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};

/// Returns the cover-fit scale of `content` inside `viewport`.
///
/// This is the smallest uniform scale at which the content covers the
/// viewport on both axes: the larger of the two per-axis fill ratios.
///
/// Returns `None` if either size has a zero, negative or non-finite
/// dimension.
#[must_use]
pub fn cover_scale(viewport: Size, content: Size) -> Option<f64> {
    let usable = |s: Size| s.width > 0.0 && s.height > 0.0 && s.is_finite();
    if !usable(viewport) || !usable(content) {
        return None;
    }
    let sx = viewport.width / content.width;
    let sy = viewport.height / content.height;
    Some(sx.max(sy))
}

/// Inclusive range of allowed scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Smallest allowed scale (cover fit).
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ScaleBounds {
    /// Derives bounds from the cover-fit scale and a configured maximum.
    ///
    /// If cover fitting already needs more than `max_scale`, the maximum is
    /// raised to the cover scale so the range never inverts.
    #[must_use]
    pub fn cover(viewport: Size, content: Size, max_scale: f64) -> Option<Self> {
        let min = cover_scale(viewport, content)?;
        Some(Self {
            min,
            max: max_scale.max(min),
        })
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies in the range.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// Translate + uniform scale applied to the content layer.
///
/// The content is scaled about its top-left corner and then translated by
/// `offset`, matching the `translate(..) scale(..)` order used by CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position of the content's top-left corner in view pixels.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation and unit scale.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns the equivalent affine map from content to view space.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Maps a view-space point to content (natural image) coordinates.
    #[must_use]
    pub fn view_to_content(self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Maps a content-space point to view coordinates.
    #[must_use]
    pub fn content_to_view(self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Returns a CSS `transform` value for this transform.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use waymark_view::Transform;
    ///
    /// let t = Transform::new(Vec2::new(-12.5, 0.0), 2.0);
    /// assert_eq!(
    ///     t.css().to_string(),
    ///     "translate3d(-12.5px, 0px, 0) scale(2)"
    /// );
    /// ```
    #[must_use]
    pub fn css(self) -> CssTransform {
        CssTransform(self)
    }
}

/// [`fmt::Display`] adapter rendering a [`Transform`] as CSS.
#[derive(Clone, Copy, Debug)]
pub struct CssTransform(Transform);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Transform { offset, scale } = self.0;
        write!(
            f,
            "translate3d({}px, {}px, 0) scale({})",
            offset.x, offset.y, scale
        )
    }
}
