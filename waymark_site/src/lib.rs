// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Site: content tooling for the Waymark documentation site.
//!
//! The site is a directory of hand-written HTML articles plus a large world
//! map viewed through `waymark_panzoom`. This crate provides the pieces that
//! run outside the browser:
//!
//! - [`build_index`] / [`write_index`]: a JSON search index of every article.
//! - [`handle_search`]: the live substring search behind `/search`,
//!   returning a status code and JSON body for whichever HTTP layer hosts it.
//! - [`prepare_map`]: shrinks the source map to a web-friendly width.
//!
//! ```no_run
//! use std::path::Path;
//! use waymark_site::{IndexOptions, build_index, handle_search, write_index};
//!
//! let docs = Path::new("docs");
//! let entries = build_index(docs, &IndexOptions::default())?;
//! write_index(&entries, &docs.join("search-index.json"))?;
//!
//! let response = handle_search(docs, "gate");
//! assert_eq!(response.status, 200);
//! # Ok::<(), waymark_site::SiteError>(())
//! ```

mod error;
mod html;
mod index;
mod map;
mod search;
mod url;

pub use error::{Result, SiteError};
pub use html::{extract_title, strip_html_tags};
pub use index::{
    DEFAULT_INDEX_FILE, IndexEntry, IndexOptions, Page, RESULTS_PAGE, build_index, html_files,
    load_pages, page_stem, read_index, write_index,
};
pub use map::{DEFAULT_MAP_OUTPUT, DEFAULT_MAP_SOURCE, DEFAULT_MAX_WIDTH, prepare_map};
pub use search::{
    SNIPPET_CONTEXT, SearchHit, SearchResponse, contains_ignore_case, handle_search, make_snippet,
    search_dir, search_index, search_pages,
};
pub use url::encode_uri;
