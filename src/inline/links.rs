//! Link and image resolution.
//!
//! `[text](target)` and `![alt](target)`. The bracketed part may contain
//! spans produced by earlier rules; the `](target)` tail must sit in a
//! single plain text node. Targets are non-empty and end at the first `)`.

use std::collections::VecDeque;

use memchr::{memchr, memmem};

use super::Node;
use crate::Range;

/// Which bracket construct to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `![alt](src)`; the alt may be empty.
    Image,
    /// `[text](href)`; never opened by a `[` right after `!`.
    Link,
}

/// Where the closing `]` was found.
enum Close {
    /// In the text node holding the opener.
    Head(usize),
    /// In the text node `rest[index]`, which covers `carrier`.
    Later {
        index: usize,
        carrier: Range,
        bracket: usize,
    },
}

/// Resolve links or images across one list of sibling nodes.
///
/// Container children are not visited; the caller recurses into them.
pub fn resolve_brackets(src: &str, nodes: Vec<Node>, kind: BracketKind) -> Vec<Node> {
    let mut rest: VecDeque<Node> = nodes.into();
    let mut out = Vec::with_capacity(rest.len());

    while let Some(node) = rest.pop_front() {
        let Node::Text(text) = node else {
            out.push(node);
            continue;
        };
        let Some(opener) = find_opener(src, text, kind) else {
            push_merged(&mut out, text);
            continue;
        };
        let label_start = opener + opener_len(kind);
        let head = Range::from_usize(label_start, text.end_usize());

        let Some(close) = find_close(src, head, &rest) else {
            // No `]` anywhere after this opener, so no later opener can match
            push_merged(&mut out, text);
            out.extend(rest.drain(..));
            break;
        };

        // Collect the label and the text node carrying `](target)`
        let mut label = Vec::new();
        let tail = match close {
            Close::Head(bracket) => {
                push_range(&mut label, label_start, bracket);
                Range::from_usize(bracket, text.end_usize())
            }
            Close::Later {
                index,
                carrier,
                bracket,
            } => {
                push_range(&mut label, label_start, text.end_usize());
                label.extend(rest.drain(..index));
                rest.pop_front();
                push_range(&mut label, carrier.start_usize(), bracket);
                Range::from_usize(bracket, carrier.end_usize())
            }
        };

        let label_ok = kind == BracketKind::Image || !label.is_empty();
        match target_after(src, tail).filter(|_| label_ok) {
            Some(target) => {
                push_range(&mut out, text.start_usize(), opener);
                out.push(match kind {
                    BracketKind::Image => Node::Image { target, alt: label },
                    BracketKind::Link => Node::Link {
                        target,
                        children: label,
                    },
                });
                requeue(&mut rest, target.end_usize() + 1, tail.end_usize());
            }
            None => {
                // Everything through the `]` stays literal; resume after it
                push_range(&mut out, text.start_usize(), label_start);
                for node in label {
                    match node {
                        Node::Text(range) => push_merged(&mut out, range),
                        other => out.push(other),
                    }
                }
                push_range(&mut out, tail.start_usize(), tail.start_usize() + 1);
                requeue(&mut rest, tail.start_usize() + 1, tail.end_usize());
            }
        }
    }

    out
}

#[inline]
fn opener_len(kind: BracketKind) -> usize {
    match kind {
        BracketKind::Image => 2,
        BracketKind::Link => 1,
    }
}

/// Find the first opener in `text`.
fn find_opener(src: &str, text: Range, kind: BracketKind) -> Option<usize> {
    let bytes = src.as_bytes();
    let start = text.start_usize();
    let end = text.end_usize();
    match kind {
        BracketKind::Image => memmem::find(&bytes[start..end], b"![").map(|offset| start + offset),
        BracketKind::Link => {
            let mut pos = start;
            while let Some(offset) = memchr(b'[', &bytes[pos..end]) {
                let at = pos + offset;
                if at == 0 || bytes[at - 1] != b'!' {
                    return Some(at);
                }
                pos = at + 1;
            }
            None
        }
    }
}

/// Find the first `]` in `head`, then in the plain text nodes of `rest`.
fn find_close(src: &str, head: Range, rest: &VecDeque<Node>) -> Option<Close> {
    if let Some(offset) = memchr(b']', head.bytes(src)) {
        return Some(Close::Head(head.start_usize() + offset));
    }
    rest.iter().enumerate().find_map(|(index, node)| match node {
        Node::Text(range) => memchr(b']', range.bytes(src)).map(|offset| Close::Later {
            index,
            carrier: *range,
            bracket: range.start_usize() + offset,
        }),
        _ => None,
    })
}

/// Parse `(target)` right after the `]` that starts `tail`.
fn target_after(src: &str, tail: Range) -> Option<Range> {
    let bytes = src.as_bytes();
    let open = tail.start_usize() + 1;
    let end = tail.end_usize();
    if open >= end || bytes[open] != b'(' {
        return None;
    }
    let offset = memchr(b')', &bytes[open + 1..end])?;
    (offset > 0).then(|| Range::from_usize(open + 1, open + 1 + offset))
}

/// Put the unconsumed part of a text node back at the front of the queue.
#[inline]
fn requeue(rest: &mut VecDeque<Node>, start: usize, end: usize) {
    if start < end {
        rest.push_front(Node::Text(Range::from_usize(start, end)));
    }
}

#[inline]
fn push_range(out: &mut Vec<Node>, start: usize, end: usize) {
    if start < end {
        push_merged(out, Range::from_usize(start, end));
    }
}

/// Push a text node, extending the previous one if they touch.
fn push_merged(out: &mut Vec<Node>, range: Range) {
    if range.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = out.last_mut() {
        if prev.end == range.start {
            prev.end = range.end;
            return;
        }
    }
    out.push(Node::Text(range));
}
