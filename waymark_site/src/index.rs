// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search index over a directory of article pages.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::html::{extract_title, strip_html_tags};

/// File name of the generated search-results page, never indexed by default.
pub const RESULTS_PAGE: &str = "搜尋結果.html";

/// Default file name of the written index.
pub const DEFAULT_INDEX_FILE: &str = "search-index.json";

/// One article as seen by the indexer and the search handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// File name within the content directory, e.g. `東門.html`.
    pub file_name: String,
    /// Display title, see [`extract_title`].
    pub title: String,
    /// Tag-stripped, whitespace-collapsed body text.
    pub text: String,
}

impl Page {
    /// Extracts title and text from a page's markup.
    #[must_use]
    pub fn from_html(file_name: &str, html: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            title: extract_title(html, page_stem(file_name)),
            text: strip_html_tags(html),
        }
    }
}

/// The file name without its `.html` suffix.
#[must_use]
pub fn page_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".html").unwrap_or(file_name)
}

/// A search index record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Link target; the page's file name.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Full page text.
    pub content: String,
}

impl From<Page> for IndexEntry {
    fn from(page: Page) -> Self {
        Self {
            url: page.file_name,
            title: page.title,
            content: page.text,
        }
    }
}

/// Which pages the indexer reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexOptions {
    /// File names to skip.
    pub excluded: Vec<String>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            excluded: vec![RESULTS_PAGE.to_owned()],
        }
    }
}

impl IndexOptions {
    /// Options that index every page.
    #[must_use]
    pub fn include_all() -> Self {
        Self {
            excluded: Vec::new(),
        }
    }

    /// Adds a file name to skip.
    #[must_use]
    pub fn exclude(mut self, file_name: impl Into<String>) -> Self {
        self.excluded.push(file_name.into());
        self
    }

    fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded.iter().any(|name| name == file_name)
    }
}

/// Lists the `*.html` files directly inside `dir`, sorted by file name.
///
/// The extension match is case-insensitive. Names that are not valid UTF-8
/// are skipped.
pub fn html_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(SiteError::io(dir))? {
        let entry = entry.map_err(SiteError::io(dir))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(path = %path.display(), "skipping non-UTF-8 file name");
            continue;
        };
        if !name.to_ascii_lowercase().ends_with(".html") || !path.is_file() {
            continue;
        }
        files.push((name, path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Reads every HTML page in `dir` that `options` does not exclude.
///
/// Invalid UTF-8 in a page is replaced rather than rejected.
pub fn load_pages(dir: &Path, options: &IndexOptions) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    for (name, path) in html_files(dir)? {
        if options.is_excluded(&name) {
            tracing::debug!(file = %name, "excluded from index");
            continue;
        }
        let bytes = fs::read(&path).map_err(SiteError::io(&path))?;
        pages.push(Page::from_html(&name, &String::from_utf8_lossy(&bytes)));
    }
    Ok(pages)
}

/// Builds index entries for every page in `dir`.
pub fn build_index(dir: &Path, options: &IndexOptions) -> Result<Vec<IndexEntry>> {
    let entries: Vec<IndexEntry> = load_pages(dir, options)?
        .into_iter()
        .map(IndexEntry::from)
        .collect();
    tracing::info!(dir = %dir.display(), pages = entries.len(), "built search index");
    Ok(entries)
}

/// Writes `entries` to `path` as pretty-printed JSON.
pub fn write_index(entries: &[IndexEntry], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json).map_err(SiteError::io(path))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "wrote search index");
    Ok(())
}

/// Reads an index previously written by [`write_index`].
pub fn read_index(path: &Path) -> Result<Vec<IndexEntry>> {
    let json = fs::read_to_string(path).map_err(SiteError::io(path))?;
    Ok(serde_json::from_str(&json)?)
}
