//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable byte with `memchr`,
//! then bulk-copies the segments between escapes.

use memchr::{memchr2, memchr3};

/// Escape `&`, `<` and `>` into `out`.
///
/// Every input byte is looked at exactly once, so the `&` of an entity
/// produced for `<` or `>` is never escaped a second time.
///
/// # Example
/// ```
/// use livemark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "5 > 3 & 2 < 4");
/// assert_eq!(out, "5 &gt; 3 &amp; 2 &lt; 4");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = memchr3(b'<', b'>', b'&', &bytes[pos..]) {
        let at = pos + offset;
        out.push_str(&input[last..at]);
        out.push_str(match bytes[at] {
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => "&amp;",
        });
        pos = at + 1;
        last = pos;
    }

    out.push_str(&input[last..]);
}

/// Escape and return a new `String`.
///
/// Prefer `escape_text_into` to reuse buffers.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input);
    out
}

/// Escape quote characters of already-escaped text for an attribute value.
///
/// `&` is left alone: the text went through [`escape_text_into`] first,
/// so escaping it again would double-encode entities.
#[inline]
pub fn escape_attr_quotes_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = memchr2(b'"', b'\'', &bytes[pos..]) {
        let at = pos + offset;
        out.push_str(&input[last..at]);
        out.push_str(if bytes[at] == b'"' { "&quot;" } else { "&#39;" });
        pos = at + 1;
        last = pos;
    }

    out.push_str(&input[last..]);
}

/// Check if a string needs any text escaping.
#[inline]
pub fn needs_text_escape(input: &str) -> bool {
    memchr3(b'<', b'>', b'&', input.as_bytes()).is_some()
}
