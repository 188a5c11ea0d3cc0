//! Delimited span resolution.
//!
//! Covers every symmetric `open content close` construct: the three
//! emphasis strengths, strikethrough, highlight and the allowlisted raw
//! tags. Matching is leftmost-first and non-greedy, content is never empty,
//! and scanning resumes right after each closer.

use memchr::memmem;

use super::{Node, SpanKind};
use crate::Range;

/// Split one text range into plain text and `kind` spans.
///
/// Content is at least one byte. Once an opener has no closer after it,
/// no later opener can have one either, so the scan stops there.
pub fn split_delimited(src: &str, range: Range, kind: SpanKind, out: &mut Vec<Node>) {
    let (open, close) = kind.delimiters();
    let bytes = src.as_bytes();
    let end = range.end_usize();
    let mut pos = range.start_usize();
    let mut last = pos;

    while let Some(offset) = memmem::find(&bytes[pos..end], open.as_bytes()) {
        let opener = pos + offset;
        let content_start = opener + open.len();
        // Closer search starts one byte in, which keeps the content non-empty
        let search_from = content_start + 1;
        if search_from > end {
            break;
        }
        let Some(close_offset) = memmem::find(&bytes[search_from..end], close.as_bytes()) else {
            break;
        };
        let closer = search_from + close_offset;

        push_text(out, last, opener);
        out.push(Node::Span {
            kind,
            children: vec![Node::Text(Range::from_usize(content_start, closer))],
        });
        pos = closer + close.len();
        last = pos;
    }

    push_text(out, last, end);
}

/// Push a text node unless the range is empty.
#[inline]
pub(super) fn push_text(out: &mut Vec<Node>, start: usize, end: usize) {
    if start < end {
        out.push(Node::Text(Range::from_usize(start, end)));
    }
}
