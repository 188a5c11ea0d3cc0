//! HTML output writer.
//!
//! Everything written through the range helpers comes from the escaped
//! document, so the writer itself never escapes text. Attribute values get
//! their quotes escaped on the way out.

use crate::block::{ListKind, TaskState};
use crate::escape;
use crate::inline::{plain_text_into, Node, SpanKind};
use crate::Range;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use livemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.heading_start(2);
/// writer.write_string("Hello");
/// writer.heading_end(2);
/// writer.line_break();
///
/// assert_eq!(writer.into_string(), "<h2>Hello</h2><br />");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup adds tags and `<br />` per line; 1.5x the input covers
    /// typical notes without regrowing.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 2),
        }
    }

    /// Reuse an existing buffer. Its contents are discarded, its capacity
    /// kept.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a range of the escaped document verbatim.
    #[inline]
    pub fn write_range(&mut self, src: &str, range: Range) {
        self.out.push_str(range.slice(src));
    }

    /// Write an attribute value taken from escaped text.
    #[inline]
    pub fn write_attr(&mut self, value: &str) {
        escape::escape_attr_quotes_into(&mut self.out, value);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    // --- Block Elements ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=4).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=4).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write thematic break: `<hr />`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr />");
    }

    /// Write line break: `<br />`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br />");
    }

    #[inline]
    pub fn blockquote_start(&mut self) {
        self.write_str("<blockquote>");
    }

    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>");
    }

    /// Write a list container start: `<ul>`, `<ol>` or `<ol start="N">`
    pub fn list_start(&mut self, kind: ListKind) {
        match kind {
            ListKind::Unordered => self.write_str("<ul>"),
            ListKind::Ordered { start: 1 } => self.write_str("<ol>"),
            ListKind::Ordered { start } => {
                self.write_str("<ol start=\"");
                self.write_u32(start);
                self.write_str("\">");
            }
        }
    }

    /// Write a list container end.
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        match kind {
            ListKind::Unordered => self.write_str("</ul>"),
            ListKind::Ordered { .. } => self.write_str("</ol>"),
        }
    }

    /// Write list item start.
    ///
    /// Standalone items carry their list kind as a class since there is
    /// no container to say it.
    #[inline]
    pub fn li_start(&mut self, kind: ListKind, standalone: bool) {
        match (standalone, kind) {
            (false, _) => self.write_str("<li>"),
            (true, ListKind::Unordered) => self.write_str("<li class=\"unordered\">"),
            (true, ListKind::Ordered { .. }) => self.write_str("<li class=\"ordered\">"),
        }
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    /// Write a task item start, marker included.
    pub fn task_start(&mut self, state: TaskState) {
        match state {
            TaskState::Checked => self.write_str(
                "<div class=\"task checked\"><span class=\"task-marker\">\u{2713}</span><del>",
            ),
            TaskState::Unchecked => self.write_str(
                "<div class=\"task\"><span class=\"task-marker\">\u{25CB}</span><span>",
            ),
        }
    }

    /// Write a task item end.
    pub fn task_end(&mut self, state: TaskState) {
        match state {
            TaskState::Checked => self.write_str("</del></div>"),
            TaskState::Unchecked => self.write_str("</span></div>"),
        }
    }

    #[inline]
    pub fn table_start(&mut self) {
        self.write_str("<table>");
    }

    #[inline]
    pub fn table_end(&mut self) {
        self.write_str("</table>");
    }

    #[inline]
    pub fn tr_start(&mut self) {
        self.write_str("<tr>");
    }

    #[inline]
    pub fn tr_end(&mut self) {
        self.write_str("</tr>");
    }

    #[inline]
    pub fn td_start(&mut self) {
        self.write_str("<td>");
    }

    #[inline]
    pub fn td_end(&mut self) {
        self.write_str("</td>");
    }

    /// Write code block start with optional language class.
    pub fn code_block_start(&mut self, lang: Option<&str>) {
        match lang {
            Some(lang) if !lang.is_empty() => {
                self.write_str("<pre><code class=\"language-");
                self.write_attr(lang);
                self.write_str("\">");
            }
            _ => self.write_str("<pre><code>"),
        }
    }

    /// Write code block end: `</code></pre>`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("</code></pre>");
    }

    // --- Inline Elements ---

    /// Write inline code: `<code>content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code>");
        self.write_string(content);
        self.write_str("</code>");
    }

    /// Write the opening tag(s) of a delimited span.
    pub fn span_start(&mut self, kind: SpanKind) {
        match kind {
            SpanKind::BoldItalic => self.write_str("<strong><em>"),
            SpanKind::Bold => self.open_tag("strong"),
            SpanKind::Italic => self.open_tag("em"),
            SpanKind::Strike => self.open_tag("del"),
            SpanKind::Highlight => self.open_tag("mark"),
            SpanKind::Raw(tag) => self.open_tag(tag.name()),
        }
    }

    /// Write the closing tag(s) of a delimited span.
    pub fn span_end(&mut self, kind: SpanKind) {
        match kind {
            SpanKind::BoldItalic => self.write_str("</em></strong>"),
            SpanKind::Bold => self.close_tag("strong"),
            SpanKind::Italic => self.close_tag("em"),
            SpanKind::Strike => self.close_tag("del"),
            SpanKind::Highlight => self.close_tag("mark"),
            SpanKind::Raw(tag) => self.close_tag(tag.name()),
        }
    }

    /// Write link start: `<a href="url">`
    #[inline]
    pub fn link_start(&mut self, url: &str) {
        self.write_str("<a href=\"");
        self.write_attr(url);
        self.write_str("\">");
    }

    /// Write link end: `</a>`
    #[inline]
    pub fn link_end(&mut self) {
        self.write_str("</a>");
    }

    /// Write an image: `<img src="url" alt="alt" />`
    pub fn image(&mut self, url: &str, alt: &str) {
        self.write_str("<img src=\"");
        self.write_attr(url);
        self.write_str("\" alt=\"");
        self.write_attr(alt);
        self.write_str("\" />");
    }

    /// Write a resolved inline node list.
    pub fn inline(&mut self, src: &str, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(range) => self.write_range(src, *range),
                Node::Code(range) => self.inline_code(range.slice(src)),
                Node::Span { kind, children } => {
                    self.span_start(*kind);
                    self.inline(src, children);
                    self.span_end(*kind);
                }
                Node::Link { target, children } => {
                    self.link_start(target.slice(src));
                    self.inline(src, children);
                    self.link_end();
                }
                Node::Image { target, alt } => {
                    let mut text = String::new();
                    plain_text_into(&mut text, src, alt);
                    self.image(target.slice(src), &text);
                }
            }
        }
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.out.push('0');
            return;
        }

        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        for &digit in &buf[i..] {
            self.out.push(char::from(digit));
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Write for HtmlWriter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::InlineParser;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=4u8 {
            let mut writer = HtmlWriter::new();
            writer.heading_start(level);
            writer.heading_end(level);
            assert_eq!(writer.as_str(), format!("<h{level}></h{level}>"));
        }
    }

    #[test]
    fn test_writer_list_items() {
        let mut writer = HtmlWriter::new();
        writer.li_start(ListKind::Unordered, true);
        writer.li_end();
        writer.li_start(ListKind::Ordered { start: 3 }, true);
        writer.li_end();
        assert_eq!(
            writer.as_str(),
            "<li class=\"unordered\"></li><li class=\"ordered\"></li>"
        );
    }

    #[test]
    fn test_writer_ol_with_start() {
        let mut writer = HtmlWriter::new();
        writer.list_start(ListKind::Ordered { start: 42 });
        writer.list_start(ListKind::Ordered { start: 1 });
        assert_eq!(writer.as_str(), "<ol start=\"42\"><ol>");
    }

    #[test]
    fn test_writer_tasks() {
        let mut writer = HtmlWriter::new();
        writer.task_start(TaskState::Checked);
        writer.write_string("done");
        writer.task_end(TaskState::Checked);
        assert_eq!(
            writer.as_str(),
            "<div class=\"task checked\"><span class=\"task-marker\">✓</span><del>done</del></div>"
        );
    }

    #[test]
    fn test_writer_code_block() {
        let mut writer = HtmlWriter::new();
        writer.code_block_start(Some("rust"));
        writer.code_block_end();
        writer.code_block_start(None);
        writer.code_block_end();
        assert_eq!(
            writer.as_str(),
            "<pre><code class=\"language-rust\"></code></pre><pre><code></code></pre>"
        );
    }

    #[test]
    fn test_writer_link_escapes_quotes() {
        let mut writer = HtmlWriter::new();
        writer.link_start("x\" onclick=\"y");
        writer.link_end();
        assert_eq!(writer.as_str(), "<a href=\"x&quot; onclick=&quot;y\"></a>");
    }

    #[test]
    fn test_writer_image_alt_is_plain() {
        let src = "![**big** cat](c.png)";
        let nodes = InlineParser::new(src).parse(Range::from_usize(0, src.len()));
        let mut writer = HtmlWriter::new();
        writer.inline(src, &nodes);
        assert_eq!(writer.as_str(), "<img src=\"c.png\" alt=\"big cat\" />");
    }

    #[test]
    fn test_writer_spans() {
        let src = "***a*** ==b==";
        let nodes = InlineParser::new(src).parse(Range::from_usize(0, src.len()));
        let mut writer = HtmlWriter::new();
        writer.inline(src, &nodes);
        assert_eq!(writer.as_str(), "<strong><em>a</em></strong> <mark>b</mark>");
    }

    #[test]
    fn test_writer_clear_reuse() {
        let mut writer = HtmlWriter::with_capacity_for(100);
        writer.line_break();
        let cap = writer.out.capacity();
        writer.clear();
        assert!(writer.is_empty());
        assert_eq!(writer.out.capacity(), cap);
    }

    #[test]
    fn test_writer_from_buffer_discards_contents() {
        let writer = HtmlWriter::from_buffer(String::from("stale"));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_u32() {
        let mut writer = HtmlWriter::new();
        writer.write_u32(0);
        writer.write_u32(4294967295);
        assert_eq!(writer.as_str(), "04294967295");
    }
}
