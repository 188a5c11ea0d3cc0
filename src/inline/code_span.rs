//! Code span resolution.
//!
//! Code spans have the highest precedence among inline elements: they are
//! split out before any other rule runs, and their content is never looked
//! at again. A span is a single backtick, at least one non-backtick byte,
//! and the next backtick.

use memchr::memchr;

use super::emphasis::push_text;
use super::Node;
use crate::Range;

/// Split a text range into plain text and `Code` nodes.
pub fn split_code_spans(src: &str, range: Range, out: &mut Vec<Node>) {
    let bytes = src.as_bytes();
    let end = range.end_usize();
    let mut pos = range.start_usize();
    let mut last = pos;

    while let Some(offset) = memchr(b'`', &bytes[pos..end]) {
        let opener = pos + offset;
        let Some(close_offset) = memchr(b'`', &bytes[opener + 1..end]) else {
            break;
        };
        let closer = opener + 1 + close_offset;

        // Empty content: the second backtick may still open a span
        if closer == opener + 1 {
            pos = closer;
            continue;
        }

        push_text(out, last, opener);
        out.push(Node::Code(Range::from_usize(opener + 1, closer)));
        pos = closer + 1;
        last = pos;
    }

    push_text(out, last, end);
}
