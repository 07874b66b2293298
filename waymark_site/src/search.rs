// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-insensitive substring search with context snippets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::{IndexEntry, IndexOptions, Page, load_pages};
use crate::url::encode_uri;

/// Characters of context kept on each side of a match start.
pub const SNIPPET_CONTEXT: usize = 40;

const ELLIPSIS: &str = "...";

/// A page matching a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Link to the page.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Text around the first match.
    pub snippet: String,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Character index of the first case-insensitive occurrence of `needle`.
fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(&a, &b)| fold(a) == fold(b))
    })
}

/// Returns `true` if `text` contains `query`, ignoring case.
#[must_use]
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let query: Vec<char> = query.chars().collect();
    find_folded(&text, &query).is_some()
}

/// Cuts a snippet out of `text` around the first match of `query`.
///
/// The window runs from [`SNIPPET_CONTEXT`] characters before the match start
/// to the same distance after it and is trimmed. `...` marks each side that
/// was cut. Without a match, the first `2 * SNIPPET_CONTEXT` characters are
/// returned followed by `...`.
///
/// ```
/// use waymark_site::make_snippet;
///
/// assert_eq!(make_snippet("The East Gate", "gate"), "The East Gate");
/// assert_eq!(make_snippet("short", "zzz"), "short...");
/// ```
#[must_use]
pub fn make_snippet(text: &str, query: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    let Some(at) = find_folded(&chars, &needle) else {
        let head: String = chars.iter().take(2 * SNIPPET_CONTEXT).collect();
        return head + ELLIPSIS;
    };
    let start = at.saturating_sub(SNIPPET_CONTEXT);
    let end = (at + SNIPPET_CONTEXT).min(chars.len());
    let window: String = chars[start..end].iter().collect();

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(window.trim());
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// Searches already-loaded pages.
///
/// Hits link to `/` followed by the URI-encoded file name. An empty or
/// all-whitespace query matches nothing.
#[must_use]
pub fn search_pages(pages: &[Page], query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    pages
        .iter()
        .filter(|page| contains_ignore_case(&page.text, query))
        .map(|page| SearchHit {
            url: format!("/{}", encode_uri(&page.file_name)),
            title: page.title.clone(),
            snippet: make_snippet(&page.text, query),
        })
        .collect()
}

/// Searches a prebuilt index; hit URLs are the entries' own URLs.
#[must_use]
pub fn search_index(entries: &[IndexEntry], query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| contains_ignore_case(&entry.content, query))
        .map(|entry| SearchHit {
            url: entry.url.clone(),
            title: entry.title.clone(),
            snippet: make_snippet(&entry.content, query),
        })
        .collect()
}

/// Reads the pages in `dir` and searches them.
///
/// The directory is not read for an empty query.
pub fn search_dir(dir: &Path, query: &str) -> Result<Vec<SearchHit>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }
    let pages = load_pages(dir, &IndexOptions::include_all())?;
    let hits = search_pages(&pages, query);
    tracing::debug!(query, pages = pages.len(), hits = hits.len(), "search");
    Ok(hits)
}

/// A search result ready to hand to an HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl SearchResponse {
    fn ok(hits: &[SearchHit]) -> Self {
        match serde_json::to_string(hits) {
            Ok(body) => Self { status: 200, body },
            Err(err) => Self::error(&err.to_string()),
        }
    }

    fn error(message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| String::from(r#"{"error":"internal error"}"#));
        Self { status: 500, body }
    }
}

/// Answers `GET /search?q=<query>` against the pages in `dir`.
///
/// Success is `200` with a JSON array of [`SearchHit`]s; any failure is `500`
/// with `{"error": <message>}`.
#[must_use]
pub fn handle_search(dir: &Path, query: &str) -> SearchResponse {
    match search_dir(dir, query) {
        Ok(hits) => SearchResponse::ok(&hits),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "search failed");
            SearchResponse::error(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{
        SearchHit, contains_ignore_case, handle_search, make_snippet, search_dir, search_index,
    };
    use crate::index::IndexEntry;

    #[test]
    fn snippet_marks_both_cuts() {
        let text = format!("{}needle{}", "a".repeat(100), "b".repeat(100));
        let snippet = make_snippet(&text, "NEEDLE");
        assert_eq!(
            snippet,
            format!("...{}needle{}...", "a".repeat(40), "b".repeat(34))
        );
    }

    #[test]
    fn snippet_near_start_has_no_leading_ellipsis() {
        let text = format!("needle {}", "x".repeat(100));
        let snippet = make_snippet(&text, "needle");
        assert!(snippet.starts_with("needle "));
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().count(), 40 + 3);
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let text = format!("{}城門{}", "東".repeat(50), "西".repeat(50));
        let snippet = make_snippet(&text, "城門");
        assert_eq!(
            snippet,
            format!("...{}城門{}...", "東".repeat(40), "西".repeat(38))
        );
    }

    #[test]
    fn snippet_without_match_is_head() {
        let text = "z".repeat(100);
        assert_eq!(make_snippet(&text, "q"), format!("{}...", "z".repeat(80)));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(contains_ignore_case("The East GATE", "gate"));
        assert!(!contains_ignore_case("The East", "gate"));
    }

    #[test]
    fn index_search_keeps_entry_urls() {
        let entries = [
            IndexEntry {
                url: "gate.html".into(),
                title: "Gate".into(),
                content: "The east gate".into(),
            },
            IndexEntry {
                url: "walls.html".into(),
                title: "Walls".into(),
                content: "Old walls".into(),
            },
        ];
        assert_eq!(
            search_index(&entries, " GATE "),
            [SearchHit {
                url: "gate.html".into(),
                title: "Gate".into(),
                snippet: "The east gate".into(),
            }]
        );
        assert!(search_index(&entries, "   ").is_empty());
    }

    #[test]
    fn directory_search_encodes_urls() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("東門.html"), "<h2>東門</h2><p>the east gate</p>").unwrap();
        fs::write(dir.path().join("walls.html"), "<p>old walls</p>").unwrap();

        let hits = search_dir(dir.path(), "Gate").unwrap();
        assert_eq!(
            hits,
            [SearchHit {
                url: "/%E6%9D%B1%E9%96%80.html".into(),
                title: "東門".into(),
                snippet: "東門 the east gate".into(),
            }]
        );
    }

    #[test]
    fn empty_query_skips_directory() {
        let response = handle_search(Path::new("/definitely/not/here"), "  ");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn unreadable_directory_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let response = handle_search(&dir.path().join("missing"), "gate");
        assert_eq!(response.status, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("missing"));
    }

    #[test]
    fn hits_serialize_as_objects() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "gate").unwrap();
        let response = handle_search(dir.path(), "gate");
        assert_eq!(response.status, 200);
        assert_eq!(
            response.body,
            r#"[{"url":"/a.html","title":"a","snippet":"gate"}]"#
        );
    }
}
