// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

/// Characters left as-is by [`encode_uri`] besides ASCII alphanumerics.
const URI_SAFE: &[u8] = b";,/?:@&=+$-_.!~*'()#";

/// Percent-encodes `text` for use as a URL path, leaving URI delimiters
/// intact.
///
/// Bytes of the UTF-8 encoding outside the unreserved and reserved sets are
/// written as `%XX` with uppercase hex digits.
///
/// ```
/// use waymark_site::encode_uri;
///
/// assert_eq!(encode_uri("old gate.html"), "old%20gate.html");
/// assert_eq!(encode_uri("城.html"), "%E5%9F%8E.html");
/// ```
#[must_use]
pub fn encode_uri(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if byte.is_ascii_alphanumeric() || URI_SAFE.contains(&byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::encode_uri;

    #[test]
    fn delimiters_survive() {
        assert_eq!(encode_uri("a/b?c=d&e#f"), "a/b?c=d&e#f");
        assert_eq!(encode_uri("(x)!~*'"), "(x)!~*'");
    }

    #[test]
    fn unsafe_ascii_is_escaped() {
        assert_eq!(encode_uri("50% off"), "50%25%20off");
        assert_eq!(encode_uri("a\"b<c>"), "a%22b%3Cc%3E");
    }

    #[test]
    fn non_ascii_is_utf8_escaped() {
        assert_eq!(encode_uri("搜尋"), "%E6%90%9C%E5%B0%8B");
    }
}
