// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark View: cover-fit viewport math for a pannable, zoomable image.
//!
//! This crate provides a small, headless model of a fixed-size viewport
//! looking at a content layer (typically a map image) that is moved with a
//! translate + uniform scale transform. It focuses on:
//! - Cover fitting: the smallest scale at which the content fills the view.
//! - Scale bounds and per-axis offset ranges.
//! - The bounded update that every transform mutation passes through.
//! - Default initial views for compact and wide layouts.
//!
//! It does **not** interpret input events or schedule frames. Gesture
//! handling, inertia and frame coalescing live in `waymark_panzoom`, which
//! drives a [`CoverViewport`] from pointer, touch and wheel input.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use waymark_view::{CoverViewport, LayoutMode};
//!
//! // 800x600 window over a 1600x900 map.
//! let mut view = CoverViewport::new(
//!     Size::new(800.0, 600.0),
//!     Size::new(1600.0, 900.0),
//!     8.0,
//! )
//! .unwrap();
//! view.reset(LayoutMode::Wide, 2.0);
//!
//! // The map fills the window exactly along its tighter axis.
//! let published = view.apply_bounded();
//! assert!((published.scale - 2.0 / 3.0).abs() < 1e-9);
//! assert_eq!(published.offset.x, 0.0);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned with a **uniform** scale and no rotation.
//! - Offsets are expressed in view pixels and place the content's top-left
//!   corner relative to the view's top-left corner.
//! - Mutations may leave the raw fields out of range; only
//!   [`CoverViewport::apply_bounded`] produces an observable transform.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod transform;
mod viewport;

pub use modes::{AxisRange, LayoutMode};
pub use transform::{CssTransform, ScaleBounds, Transform, cover_scale};
pub use viewport::{CoverViewport, CoverViewportDebugInfo};
