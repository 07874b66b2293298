// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{AxisRange, LayoutMode};
use crate::transform::{ScaleBounds, Transform};

/// Fixed-size viewport over a content layer that must always cover it.
///
/// `CoverViewport` holds the viewport and content geometry, the derived
/// [`ScaleBounds`], and a raw [`Transform`]. Mutating helpers write the raw
/// fields directly; [`CoverViewport::apply_bounded`] clamps them and returns
/// the transform to publish.
#[derive(Clone, Debug)]
pub struct CoverViewport {
    viewport: Size,
    content: Size,
    bounds: ScaleBounds,
    transform: Transform,
}

impl CoverViewport {
    /// Creates a viewport for the given geometry.
    ///
    /// The initial transform is the cover-fit scale at offset zero; call
    /// [`CoverViewport::reset`] to pick a layout-specific view.
    ///
    /// Returns `None` if either geometry has a zero or non-finite dimension.
    #[must_use]
    pub fn new(viewport: Size, content: Size, max_scale: f64) -> Option<Self> {
        let bounds = ScaleBounds::cover(viewport, content, max_scale)?;
        Some(Self {
            viewport,
            content,
            bounds,
            transform: Transform::new(Vec2::ZERO, bounds.min),
        })
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the content's natural (unscaled) size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Returns the allowed scale range.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Returns the raw, possibly unclamped transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Overwrites the raw transform. It is clamped on the next bounded update.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Resets to the default initial view for `layout`.
    ///
    /// - Wide: cover-fit scale, left-aligned, vertically centered.
    /// - Compact: `compact_zoom` times the cover-fit scale, anchored top-left.
    pub fn reset(&mut self, layout: LayoutMode, compact_zoom: f64) {
        let min = self.bounds.min;
        let (scale, offset_y) = match layout {
            LayoutMode::Compact => (min * compact_zoom, 0.0),
            LayoutMode::Wide => (min, (self.viewport.height - self.content.height * min) / 2.0),
        };
        self.transform = Transform::new(Vec2::new(0.0, offset_y), scale);
    }

    /// Moves the content by `delta` view pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.transform.offset += delta;
    }

    /// Sets a new scale, keeping the view point `anchor` over the same
    /// content point.
    ///
    /// The requested scale is clamped into the bounds first. Returns the
    /// ratio actually applied (`1.0` if nothing changed).
    pub fn rescale_about(&mut self, anchor: Point, scale: f64) -> f64 {
        let old = self.transform.scale;
        let new = self.bounds.clamp(scale);
        if old <= 0.0 || !old.is_finite() || !new.is_finite() {
            return 1.0;
        }
        let ratio = new / old;
        let anchor = anchor.to_vec2();
        self.transform.offset = anchor - (anchor - self.transform.offset) * ratio;
        self.transform.scale = new;
        ratio
    }

    /// Multiplies the scale by `factor` around the view point `anchor`.
    ///
    /// Non-positive or non-finite factors are ignored. Returns the ratio
    /// actually applied after clamping.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> f64 {
        if factor <= 0.0 || !factor.is_finite() {
            return 1.0;
        }
        self.rescale_about(anchor, self.transform.scale * factor)
    }

    /// Size of the content at the current raw scale.
    #[must_use]
    pub fn displayed_size(&self) -> Size {
        self.content * self.transform.scale
    }

    /// Allowed offsets per axis at the current raw scale.
    #[must_use]
    pub fn offset_ranges(&self) -> (AxisRange, AxisRange) {
        let shown = self.displayed_size();
        (
            AxisRange::for_axis(self.viewport.width, shown.width),
            AxisRange::for_axis(self.viewport.height, shown.height),
        )
    }

    /// Clamps scale and offsets in place and returns the transform to publish.
    ///
    /// Applying this twice in a row yields the same transform.
    pub fn apply_bounded(&mut self) -> Transform {
        self.transform.scale = self.bounds.clamp(self.transform.scale);
        let (x, y) = self.offset_ranges();
        self.transform.offset = Vec2::new(
            x.clamp(self.transform.offset.x),
            y.clamp(self.transform.offset.y),
        );
        self.transform
    }

    /// Returns `true` if the raw transform already satisfies every bound.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        let (x, y) = self.offset_ranges();
        self.bounds.contains(self.transform.scale)
            && x.contains(self.transform.offset.x)
            && y.contains(self.transform.offset.y)
    }

    /// Content-space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let p0 = self.transform.view_to_content(Point::ORIGIN);
        let p1 = self.transform.view_to_content(self.viewport.to_vec2().to_point());
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CoverViewportDebugInfo {
        CoverViewportDebugInfo {
            viewport: self.viewport,
            content: self.content,
            bounds: self.bounds,
            transform: self.transform,
            displayed: self.displayed_size(),
            visible_content: self.visible_content_rect(),
        }
    }
}

/// Debug snapshot of a [`CoverViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct CoverViewportDebugInfo {
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Natural content size.
    pub content: Size,
    /// Allowed scale range.
    pub bounds: ScaleBounds,
    /// Raw transform.
    pub transform: Transform,
    /// Content size at the raw scale.
    pub displayed: Size,
    /// Content-space rectangle visible through the viewport.
    pub visible_content: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::CoverViewport;
    use crate::{LayoutMode, Transform};

    fn map_view() -> CoverViewport {
        CoverViewport::new(Size::new(800.0, 600.0), Size::new(1600.0, 900.0), 8.0).unwrap()
    }

    fn covers(vp: &CoverViewport) -> bool {
        let t = vp.transform();
        let shown = vp.displayed_size();
        let view = vp.viewport();
        t.offset.x <= 1e-9
            && t.offset.y <= 1e-9
            && t.offset.x + shown.width >= view.width - 1e-9
            && t.offset.y + shown.height >= view.height - 1e-9
    }

    #[test]
    fn wide_layout_starts_at_cover_fit() {
        let mut vp = map_view();
        vp.reset(LayoutMode::Wide, 2.0);
        let t = vp.apply_bounded();
        assert!((t.scale - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(t.offset.x, 0.0);
        assert!(t.offset.y.abs() < 1e-9);
    }

    #[test]
    fn compact_layout_starts_zoomed_top_left() {
        let mut vp = map_view();
        vp.reset(LayoutMode::Compact, 2.0);
        let t = vp.apply_bounded();
        assert!((t.scale - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(t.offset, Vec2::ZERO);
    }

    #[test]
    fn bounded_update_clamps_and_is_idempotent() {
        let mut vp = map_view();
        vp.set_transform(Transform::new(Vec2::new(500.0, -9000.0), 0.01));
        let first = vp.apply_bounded();
        assert!(vp.is_bounded());
        assert!(covers(&vp));
        assert_eq!(first.scale, vp.bounds().min);
        let second = vp.apply_bounded();
        assert_eq!(first, second);

        vp.set_transform(Transform::new(Vec2::new(-1e9, 1e9), 100.0));
        let t = vp.apply_bounded();
        assert_eq!(t.scale, 8.0);
        assert!(covers(&vp));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = map_view();
        vp.reset(LayoutMode::Wide, 2.0);
        vp.apply_bounded();

        let anchor = Point::new(400.0, 300.0);
        let before = vp.transform().view_to_content(anchor);
        let ratio = vp.zoom_about(anchor, 1.5);
        assert!((ratio - 1.5).abs() < 1e-12);
        let after = vp.transform().view_to_content(anchor);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_reports_clamped_ratio() {
        let mut vp = map_view();
        vp.reset(LayoutMode::Wide, 2.0);
        // Already at the minimum: zooming out does nothing.
        let ratio = vp.zoom_about(Point::new(10.0, 10.0), 0.5);
        assert!((ratio - 1.0).abs() < 1e-12);
        // Non-positive factors are ignored.
        assert_eq!(vp.zoom_about(Point::new(10.0, 10.0), 0.0), 1.0);
        assert_eq!(vp.zoom_about(Point::new(10.0, 10.0), f64::NAN), 1.0);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        assert!(CoverViewport::new(Size::ZERO, Size::new(10.0, 10.0), 8.0).is_none());
        assert!(CoverViewport::new(Size::new(10.0, 10.0), Size::new(10.0, 0.0), 8.0).is_none());
    }

    #[test]
    fn visible_rect_tracks_transform() {
        let mut vp = map_view();
        vp.set_transform(Transform::new(Vec2::new(-100.0, -50.0), 1.0));
        let info = vp.debug_info();
        assert_eq!(info.visible_content.x0, 100.0);
        assert_eq!(info.visible_content.y0, 50.0);
        assert_eq!(info.visible_content.width(), 800.0);
        assert_eq!(info.displayed, Size::new(1600.0, 900.0));
    }
}
