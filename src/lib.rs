//! livemark: live-preview markup to sanitized HTML
//!
//! Renders a small, fixed markup dialect into an HTML fragment, fast
//! enough to re-run on every keystroke.
//!
//! # Design Principles
//! - Escape first: all input `&`, `<`, `>` become entities before any
//!   markup is recognized, and only three allowlisted tags come back
//! - Never fail: every input renders to something
//! - Fixed precedence: inline rules run in one explicit order
//! - Ranges into one escaped buffer, no per-line copies
//!
//! Besides rendering, [`snippet`] holds the toolbar insertion templates
//! and [`challenge`] the practice exercises.

pub mod block;
pub mod challenge;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod range;
pub mod render;
pub mod snippet;

use std::borrow::Cow;

use log::trace;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind, TaskState};
pub use challenge::{Challenge, Session, CHALLENGES};
pub use inline::{InlineParser, Node};
pub use range::Range;
pub use render::HtmlWriter;
pub use snippet::{append_syntax, insert_syntax, Insertion, SyntaxRule, CATALOG};

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Turn escaped `<u>`, `<sup>` and `<sub>` pairs back into tags.
    pub raw_tags: bool,
    /// Wrap adjacent list items of the same kind in `<ul>`/`<ol>`.
    ///
    /// Off by default: every item is a standalone `<li>` separated by
    /// line breaks, like every other line.
    pub group_lists: bool,
    /// Emit a fence's info string as `class="language-…"`.
    pub language_class: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            raw_tags: true,
            group_lists: false,
            language_class: false,
        }
    }
}

/// Convert markup to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = livemark::to_html("# Hello\nWorld");
/// assert_eq!(html, "<h1>Hello</h1><br />World");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert markup to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert markup to HTML, writing into a provided buffer.
///
/// The buffer is cleared first. Reusing one buffer across keystrokes
/// avoids an allocation per render once it has grown.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert markup to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(input, &mut writer, options);
    *out = writer.into_string();
}

/// Escape, segment, then render block by block.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    let escaped = if escape::needs_text_escape(input) {
        Cow::Owned(escape::escape_text(input))
    } else {
        Cow::Borrowed(input)
    };
    let src: &str = &escaped;
    trace!("escaped {} input bytes to {}", input.len(), src.len());

    let mut events = Vec::with_capacity(src.len() / 16 + 4);
    BlockParser::new(src).parse(&mut events);
    trace!("segmented into {} block events", events.len());

    let mut renderer = Renderer {
        src,
        inline: InlineParser::new(src).raw_tags(options.raw_tags),
        options,
        open_list: None,
        pending_break: false,
    };
    for event in &events {
        renderer.event(writer, event);
    }
    renderer.finish(writer);
    trace!("rendered {} bytes of html", writer.len());
}

/// Per-call rendering state.
struct Renderer<'a> {
    src: &'a str,
    inline: InlineParser<'a>,
    options: &'a Options,
    /// Kind of the list container currently open (grouped lists only).
    open_list: Option<ListKind>,
    /// A line break seen while a list was open, held back until we know
    /// whether the next item continues the list.
    pending_break: bool,
}

impl Renderer<'_> {
    fn event(&mut self, writer: &mut HtmlWriter, event: &BlockEvent) {
        match *event {
            BlockEvent::LineBreak if self.open_list.is_some() => {
                self.pending_break = true;
                return;
            }
            BlockEvent::ListItem { kind, content } if self.options.group_lists => {
                self.list_item(writer, kind, content);
                return;
            }
            _ => self.close_list(writer),
        }

        match *event {
            BlockEvent::Heading { level, content } => {
                writer.heading_start(level);
                self.content(writer, content);
                writer.heading_end(level);
            }
            BlockEvent::ThematicBreak => writer.thematic_break(),
            BlockEvent::BlockQuote(content) => {
                writer.blockquote_start();
                self.content(writer, content);
                writer.blockquote_end();
            }
            BlockEvent::ListItem { kind, content } => {
                writer.li_start(kind, true);
                self.content(writer, content);
                writer.li_end();
            }
            BlockEvent::TaskItem { state, content } => {
                writer.task_start(state);
                self.content(writer, content);
                writer.task_end(state);
            }
            BlockEvent::TableStart => writer.table_start(),
            BlockEvent::TableRowStart => writer.tr_start(),
            BlockEvent::TableCell(content) => {
                writer.td_start();
                self.content(writer, content);
                writer.td_end();
            }
            BlockEvent::TableRowEnd => writer.tr_end(),
            BlockEvent::TableSeparator => {}
            BlockEvent::TableEnd => writer.table_end(),
            BlockEvent::CodeBlockStart { info } => {
                let lang = info
                    .filter(|_| self.options.language_class)
                    .map(|range| range.slice(self.src));
                writer.code_block_start(lang);
            }
            BlockEvent::Code(range) => {
                writer.write_range(self.src, range);
                writer.newline();
            }
            BlockEvent::CodeBlockEnd => writer.code_block_end(),
            BlockEvent::Text(content) => self.content(writer, content),
            BlockEvent::LineBreak => writer.line_break(),
        }
    }

    /// Render a grouped list item, opening or continuing a container.
    fn list_item(&mut self, writer: &mut HtmlWriter, kind: ListKind, content: Range) {
        match self.open_list {
            Some(open) if open.same_list(kind) => self.pending_break = false,
            _ => {
                self.close_list(writer);
                writer.list_start(kind);
                self.open_list = Some(kind);
            }
        }
        writer.li_start(kind, false);
        self.content(writer, content);
        writer.li_end();
    }

    /// Close the open list container, then emit any held-back break.
    fn close_list(&mut self, writer: &mut HtmlWriter) {
        if let Some(kind) = self.open_list.take() {
            writer.list_end(kind);
        }
        if std::mem::take(&mut self.pending_break) {
            writer.line_break();
        }
    }

    #[inline]
    fn content(&self, writer: &mut HtmlWriter, content: Range) {
        let nodes = self.inline.parse(content);
        writer.inline(self.src, &nodes);
    }

    fn finish(&mut self, writer: &mut HtmlWriter) {
        self.close_list(writer);
    }
}
