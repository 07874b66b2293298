// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal HTML text extraction.
//!
//! Pages are hand-written articles, so this is a tag scrubber rather than a
//! parser: markup becomes whitespace and entities are left as written.

/// Replaces every `<...>` tag with a space, collapses whitespace runs to a
/// single space and trims the result.
///
/// A `<` without a closing `>` is kept as text.
///
/// ```
/// use waymark_site::strip_html_tags;
///
/// assert_eq!(
///     strip_html_tags("<p>Old <b>harbour</b>\n  road</p>"),
///     "Old harbour road",
/// );
/// ```
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    let mut spaced = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        spaced.push_str(&rest[..open]);
        spaced.push(' ');
        rest = &rest[open + close + 1..];
    }
    spaced.push_str(rest);
    collapse_whitespace(&spaced)
}

/// Unicode whitespace plus the byte-order mark, which editors leave at the
/// start of saved pages.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_space).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Picks a display title for a page.
///
/// Prefers the text of the first `<h2>`, then the `<title>` element, then
/// `fallback` (usually the file name without its extension). Empty
/// candidates are skipped.
#[must_use]
pub fn extract_title(html: &str, fallback: &str) -> String {
    first_heading(html)
        .or_else(|| title_element(html))
        .unwrap_or_else(|| fallback.to_owned())
}

/// Text of the first `<h2 ...>...</h2>`, tags stripped.
fn first_heading(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<h2")?;
    let body = open + lower[open..].find('>')? + 1;
    let close = body + lower[body..].find("</h2>")?;
    non_empty(strip_html_tags(&html[body..close]))
}

/// Text of the first well-formed `<title>...</title>` without nested tags.
fn title_element(html: &str) -> Option<String> {
    const OPEN: &str = "<title>";
    const CLOSE: &str = "</title>";
    let lower = html.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from..].find(OPEN) {
        let body = from + found + OPEN.len();
        let end = lower[body..].find('<').map_or(lower.len(), |i| body + i);
        if lower[end..].starts_with(CLOSE) {
            if let Some(title) = non_empty(html[body..end].trim_matches(is_space).to_owned()) {
                return Some(title);
            }
        }
        from = body;
    }
    None
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
