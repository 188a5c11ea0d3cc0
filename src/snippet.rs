//! Toolbar snippet catalog and cursor splicing.
//!
//! Each [`SyntaxRule`] is a template the editor can drop into the text at
//! the current selection. Offsets are byte offsets into the text.

use std::ops::Range;

/// Placeholder inserted between wrapping delimiters when nothing is
/// selected.
pub const PLACEHOLDER: &str = "text";

/// One insertable markup template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRule {
    /// Short button label.
    pub label: &'static str,
    /// The bare syntax, for display.
    pub raw: &'static str,
    /// Text inserted before the selection (or at the cursor).
    pub insert_before: &'static str,
    /// Closing delimiter when it differs from `insert_before`.
    pub insert_after: Option<&'static str>,
    /// What the template produces.
    pub description: &'static str,
    /// Whether the template wraps the selection.
    pub wraps_selection: bool,
}

impl SyntaxRule {
    const fn wrap(label: &'static str, raw: &'static str, before: &'static str, description: &'static str) -> Self {
        Self {
            label,
            raw,
            insert_before: before,
            insert_after: None,
            description,
            wraps_selection: true,
        }
    }

    const fn wrap_with(
        label: &'static str,
        raw: &'static str,
        before: &'static str,
        after: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            label,
            raw,
            insert_before: before,
            insert_after: Some(after),
            description,
            wraps_selection: true,
        }
    }

    const fn insert(label: &'static str, raw: &'static str, text: &'static str, description: &'static str) -> Self {
        Self {
            label,
            raw,
            insert_before: text,
            insert_after: None,
            description,
            wraps_selection: false,
        }
    }

    /// Closing delimiter of a wrapping rule.
    #[inline]
    pub fn closing(&self) -> &'static str {
        self.insert_after.unwrap_or(self.insert_before)
    }

    /// Look up a catalog entry by its label.
    pub fn find(label: &str) -> Option<&'static SyntaxRule> {
        CATALOG.iter().find(|rule| rule.label == label)
    }
}

/// The toolbar templates, in button order.
pub static CATALOG: &[SyntaxRule] = &[
    SyntaxRule::insert("H1", "#", "# ", "Heading 1"),
    SyntaxRule::insert("H2", "##", "## ", "Heading 2"),
    SyntaxRule::insert("H3", "###", "### ", "Heading 3"),
    SyntaxRule::insert("H4", "####", "#### ", "Heading 4"),
    SyntaxRule::wrap("B", "**", "**", "Bold"),
    SyntaxRule::wrap("I", "*", "*", "Italic"),
    SyntaxRule::wrap("S", "~~", "~~", "Strikethrough"),
    SyntaxRule::wrap_with("U", "<u>", "<u>", "</u>", "Underline"),
    SyntaxRule::wrap("==", "==", "==", "Highlight"),
    SyntaxRule::wrap("code", "`", "`", "Inline code"),
    SyntaxRule::wrap_with("```", "```", "```\n", "\n```", "Code block"),
    SyntaxRule::insert("\u{2022}", "-", "- ", "Bulleted list"),
    SyntaxRule::insert("1.", "1.", "1. ", "Numbered list"),
    SyntaxRule::insert("\u{2610}", "- [ ]", "- [ ] ", "Task"),
    SyntaxRule::insert("\u{2611}", "- [x]", "- [x] ", "Completed task"),
    SyntaxRule::insert(">", ">", "> ", "Quote"),
    SyntaxRule::insert("\u{2014}", "---", "\n---\n", "Horizontal rule"),
    SyntaxRule::wrap_with("link", "[]()", "[", "](url)", "Link"),
    SyntaxRule::wrap_with("image", "![]()", "![alt](", ")", "Image"),
    SyntaxRule::insert(
        "table",
        "| |",
        "\n| Col 1 | Col 2 | Col 3 |\n|-----|-----|-----|\n| Cell | Cell | Cell |\n",
        "Table",
    ),
];

/// Result of splicing a template into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The new text.
    pub text: String,
    /// Byte offset of the cursor in `text`.
    pub cursor: usize,
}

/// Splice `rule` into `text` at `selection`.
///
/// A wrapping rule surrounds the selection (or [`PLACEHOLDER`] when the
/// selection is empty) and leaves the cursor right after the opening
/// delimiter. Any other rule replaces the selection and leaves the cursor
/// after the inserted text.
///
/// Offsets past the end are clamped, a reversed selection is swapped, and
/// offsets inside a multi-byte character move back to its start.
///
/// # Example
/// ```
/// use livemark::snippet::{insert_syntax, SyntaxRule};
///
/// let bold = SyntaxRule::find("B").unwrap();
/// let out = insert_syntax(bold, "say hi", 4..6);
/// assert_eq!(out.text, "say **hi**");
/// assert_eq!(out.cursor, 6);
/// ```
pub fn insert_syntax(rule: &SyntaxRule, text: &str, selection: Range<usize>) -> Insertion {
    let (start, end) = normalize(text, selection);
    let selected = &text[start..end];

    let mut out = String::with_capacity(text.len() + rule.insert_before.len() + PLACEHOLDER.len() + 8);
    out.push_str(&text[..start]);
    out.push_str(rule.insert_before);
    let cursor = out.len();

    if rule.wraps_selection {
        out.push_str(if selected.is_empty() { PLACEHOLDER } else { selected });
        out.push_str(rule.closing());
    }
    out.push_str(&text[end..]);

    Insertion { text: out, cursor }
}

/// Append the full template of `rule` to the end of `text`.
///
/// Wrapping rules get their placeholder and closing delimiter too, so the
/// result always contains a complete construct.
pub fn append_syntax(rule: &SyntaxRule, text: &str) -> String {
    insert_syntax(rule, text, text.len()..text.len()).text
}

/// Clamp, order and snap a selection to char boundaries.
fn normalize(text: &str, selection: Range<usize>) -> (usize, usize) {
    let mut start = floor_char_boundary(text, selection.start);
    let mut end = floor_char_boundary(text, selection.end);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    (start, end)
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
