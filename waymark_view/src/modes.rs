// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Page layout the viewport is embedded in, decided by the host from the
/// window width.
///
/// The layout only affects the initial view chosen by
/// [`crate::CoverViewport::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Narrow layout: content starts pre-zoomed and anchored top-left.
    Compact,
    /// Wide layout: content starts at cover fit, left-aligned and
    /// vertically centered.
    #[default]
    Wide,
}

impl LayoutMode {
    /// Window width (in CSS pixels) below which layouts are compact.
    pub const DEFAULT_BREAKPOINT: f64 = 720.0;

    /// Picks the layout for a window of the given width.
    ///
    /// Widths strictly below `breakpoint` are [`LayoutMode::Compact`].
    #[must_use]
    pub fn from_window_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Returns `true` for [`LayoutMode::Compact`].
    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

/// Allowed offset values along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisRange {
    /// Content is at least as large as the view: any offset in
    /// `[min, max]` keeps the view covered, with `max == 0.0`.
    Span {
        /// Most negative offset (content's far edge on the view's far edge).
        min: f64,
        /// Least negative offset, always `0.0`.
        max: f64,
    },
    /// Content is smaller than the view and is centered at this offset.
    ///
    /// Cover fitting keeps this from happening in practice.
    Centered(f64),
}

impl AxisRange {
    /// Computes the range for a view extent and a displayed content extent.
    #[must_use]
    pub fn for_axis(view: f64, displayed: f64) -> Self {
        if displayed >= view {
            Self::Span {
                min: view - displayed,
                max: 0.0,
            }
        } else {
            Self::Centered((view - displayed) / 2.0)
        }
    }

    /// Clamps `offset` into this range.
    #[must_use]
    pub fn clamp(self, offset: f64) -> f64 {
        match self {
            Self::Span { min, max } => offset.clamp(min, max),
            Self::Centered(center) => center,
        }
    }

    /// Returns `true` if `offset` already lies in this range.
    #[must_use]
    pub fn contains(self, offset: f64) -> bool {
        match self {
            Self::Span { min, max } => offset >= min && offset <= max,
            Self::Centered(center) => offset == center,
        }
    }
}
