//! Inline span renderer.
//!
//! Turns the content range of a block into a small node tree:
//! 1. Code spans are split out first and never looked at again.
//! 2. The remaining rules run in [`PRECEDENCE`] order, each over every
//!    plain text node left by the rules before it.
//!
//! A rule only ever splits a single text node, so no span can cross the
//! boundary of a span created earlier and the output is always well
//! nested. Link text and image alt are the exception that proves the
//! rule: they may *contain* earlier spans, but never cut through one.

mod code_span;
mod emphasis;
mod links;
mod raw_tag;

pub use links::BracketKind;
pub use raw_tag::AllowedTag;

use crate::Range;
use code_span::split_code_spans;
use emphasis::split_delimited;
use links::resolve_brackets;

/// A resolved inline node. Ranges point into the escaped document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain escaped text.
    Text(Range),
    /// Inline code content (without the backticks).
    Code(Range),
    /// A delimited span.
    Span {
        kind: SpanKind,
        children: Vec<Node>,
    },
    /// `[text](target)`.
    Link {
        target: Range,
        children: Vec<Node>,
    },
    /// `![alt](target)`. The alt is rendered as plain text.
    Image { target: Range, alt: Vec<Node> },
}

/// Kind of delimited span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `***x***`
    BoldItalic,
    /// `**x**`
    Bold,
    /// `*x*`
    Italic,
    /// `~~x~~`
    Strike,
    /// `==x==`
    Highlight,
    /// `<u>x</u>`, `<sup>x</sup>` or `<sub>x</sub>` in the source.
    Raw(AllowedTag),
}

impl SpanKind {
    /// Opening and closing delimiters as they appear in escaped text.
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::BoldItalic => ("***", "***"),
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Strike => ("~~", "~~"),
            Self::Highlight => ("==", "=="),
            Self::Raw(tag) => (tag.escaped_open(), tag.escaped_close()),
        }
    }
}

/// One step of inline resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Backtick code spans.
    Code,
    /// A symmetric delimited span.
    Delimited(SpanKind),
    /// Images or links.
    Bracket(BracketKind),
}

/// Inline rules, highest precedence first.
///
/// Images run before links so `![alt](src)` is never read as `!` followed
/// by a link.
pub const PRECEDENCE: &[Rule] = &[
    Rule::Code,
    Rule::Delimited(SpanKind::BoldItalic),
    Rule::Delimited(SpanKind::Bold),
    Rule::Delimited(SpanKind::Italic),
    Rule::Delimited(SpanKind::Strike),
    Rule::Delimited(SpanKind::Highlight),
    Rule::Delimited(SpanKind::Raw(AllowedTag::Underline)),
    Rule::Delimited(SpanKind::Raw(AllowedTag::Superscript)),
    Rule::Delimited(SpanKind::Raw(AllowedTag::Subscript)),
    Rule::Bracket(BracketKind::Image),
    Rule::Bracket(BracketKind::Link),
];

/// Inline parser over one escaped document.
///
/// # Example
/// ```
/// use livemark::inline::{InlineParser, Node};
/// use livemark::Range;
///
/// let src = "a `b`";
/// let nodes = InlineParser::new(src).parse(Range::new(0, 5));
/// assert_eq!(nodes[1], Node::Code(Range::new(3, 4)));
/// ```
pub struct InlineParser<'a> {
    /// Escaped document all ranges point into.
    src: &'a str,
    /// Whether the allowlisted raw tags are re-admitted.
    raw_tags: bool,
}

impl<'a> InlineParser<'a> {
    /// Create a parser with raw tags enabled.
    pub fn new(src: &'a str) -> Self {
        Self { src, raw_tags: true }
    }

    /// Enable or disable the allowlisted raw tags.
    pub fn raw_tags(mut self, enabled: bool) -> Self {
        self.raw_tags = enabled;
        self
    }

    /// Resolve the inline content of one block.
    pub fn parse(&self, content: Range) -> Vec<Node> {
        let mut nodes = Vec::new();
        if content.is_empty() {
            return nodes;
        }
        nodes.push(Node::Text(content));

        for &rule in PRECEDENCE {
            if !self.enabled(rule) {
                continue;
            }
            nodes = self.apply(rule, nodes);
        }
        nodes
    }

    #[inline]
    fn enabled(&self, rule: Rule) -> bool {
        self.raw_tags || !matches!(rule, Rule::Delimited(SpanKind::Raw(_)))
    }

    /// Apply one rule to a sibling list, recursing into containers.
    fn apply(&self, rule: Rule, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text(range) => match rule {
                    Rule::Code => split_code_spans(self.src, range, &mut out),
                    Rule::Delimited(kind) => split_delimited(self.src, range, kind, &mut out),
                    Rule::Bracket(_) => out.push(Node::Text(range)),
                },
                Node::Code(range) => out.push(Node::Code(range)),
                Node::Span { kind, children } => out.push(Node::Span {
                    kind,
                    children: self.apply(rule, children),
                }),
                Node::Link { target, children } => out.push(Node::Link {
                    target,
                    children: self.apply(rule, children),
                }),
                Node::Image { target, alt } => out.push(Node::Image {
                    target,
                    alt: self.apply(rule, alt),
                }),
            }
        }

        match rule {
            Rule::Bracket(kind) => resolve_brackets(self.src, out, kind),
            _ => out,
        }
    }
}

/// Append the text content of `nodes` with all markup stripped.
///
/// Used for image alt attributes. The text is still entity-escaped.
pub fn plain_text_into(out: &mut String, src: &str, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(range) | Node::Code(range) => out.push_str(range.slice(src)),
            Node::Span { children, .. } | Node::Link { children, .. } => {
                plain_text_into(out, src, children)
            }
            Node::Image { alt, .. } => plain_text_into(out, src, alt),
        }
    }
}
