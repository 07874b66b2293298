// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use waymark_view::LayoutMode;

/// Input consumed by [`crate::PanZoomController::handle_event`].
///
/// Positions are in view pixels relative to the viewport's top-left corner.
/// Timestamps are monotonic milliseconds from the host's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Mouse button or pen pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// Pointer moved (with or without a button held).
    PointerMove {
        /// Pointer position.
        position: Point,
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// Mouse button or pen released.
    PointerUp {
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// One or more fingers touched down.
    TouchStart {
        /// Every touch now on the surface.
        touches: &'a [Point],
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// Touches moved.
    TouchMove {
        /// Every touch now on the surface.
        touches: &'a [Point],
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// One or more fingers lifted (or the touch was cancelled).
    TouchEnd {
        /// The touches still on the surface.
        touches: &'a [Point],
        /// Event time in milliseconds.
        time_ms: f64,
    },
    /// Wheel or trackpad scroll, interpreted as zoom.
    Wheel {
        /// Cursor position.
        position: Point,
        /// Vertical delta in pixels; negative zooms in.
        delta_y: f64,
    },
    /// The viewport was resized or the layout changed.
    Resize {
        /// New viewport size.
        viewport: Size,
        /// Layout for the new window width.
        layout: LayoutMode,
    },
    /// The content finished loading with this natural size.
    ContentLoaded {
        /// Natural content size.
        content: Size,
    },
}
