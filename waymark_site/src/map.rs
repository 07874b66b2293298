// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Downscaling of the source map image for the web.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;

use crate::error::{Result, SiteError};

/// Widest map the site serves, in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 2500;

/// Source map, relative to the project root.
pub const DEFAULT_MAP_SOURCE: &str = "tools-src/world-map.png";

/// Published map, relative to the project root.
pub const DEFAULT_MAP_OUTPUT: &str = "docs/world-map.png";

/// Copies the image at `input` to `output`, shrinking it to at most
/// `max_width` pixels wide with its aspect ratio kept.
///
/// Images that already fit are re-encoded at their own size, never enlarged.
/// The output format follows the output extension, and missing parent
/// directories are created. Returns the written `(width, height)`.
pub fn prepare_map(input: &Path, output: &Path, max_width: u32) -> Result<(u32, u32)> {
    if !input.is_file() {
        return Err(SiteError::MissingInput(input.to_path_buf()));
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }

    let img = image::open(input)?;
    let (width, height) = (img.width(), img.height());
    let img = if width > max_width.max(1) {
        img.resize(max_width.max(1), height, FilterType::Lanczos3)
    } else {
        img
    };
    img.save(output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        from = ?(width, height),
        to = ?(img.width(), img.height()),
        "prepared map"
    );
    Ok((img.width(), img.height()))
}
