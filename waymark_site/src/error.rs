// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while indexing, searching or preparing site assets.
#[derive(Debug)]
pub enum SiteError {
    /// A filesystem operation on `path` failed.
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A required input file does not exist.
    MissingInput(PathBuf),
    /// Serializing the index or a response failed.
    Json(serde_json::Error),
    /// Decoding, resizing or encoding an image failed.
    Image(image::ImageError),
}

impl SiteError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::MissingInput(path) => write!(f, "input not found: {}", path.display()),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::Image(err) => write!(f, "image: {err}"),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MissingInput(_) => None,
            Self::Json(err) => Some(err),
            Self::Image(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<image::ImageError> for SiteError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

/// Result alias for this crate.
pub type Result<T, E = SiteError> = core::result::Result<T, E>;
