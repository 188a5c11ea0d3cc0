//! Block-level event types.

use crate::Range;

/// Events emitted by the block segmenter.
///
/// Content ranges point into the escaped document and still carry inline
/// markup; the renderer hands them to the inline parser. `Code` ranges are
/// verbatim and never inline-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// A heading line (`#` to `####`).
    Heading {
        /// Heading level (1-4).
        level: u8,
        /// Text after the marker and its single space.
        content: Range,
    },

    /// A `---` line.
    ThematicBreak,

    /// A single `> ` line. Consecutive quote lines stay separate blocks.
    BlockQuote(Range),

    /// A single list item line.
    ListItem {
        /// Bullet or numbered.
        kind: ListKind,
        /// Text after the marker.
        content: Range,
    },

    /// A `- [ ] ` or `- [x] ` line.
    TaskItem {
        /// Checked or unchecked.
        state: TaskState,
        /// Text after the checkbox.
        content: Range,
    },

    /// Start of a run of adjacent table lines.
    TableStart,
    /// Start of a data row.
    TableRowStart,
    /// One trimmed cell of the current row.
    TableCell(Range),
    /// End of a data row.
    TableRowEnd,
    /// A `|---|:--:|` line. Produces no output.
    TableSeparator,
    /// End of the table run.
    TableEnd,

    /// Start of a fenced code block.
    CodeBlockStart {
        /// Info string (language tag), if any.
        info: Option<Range>,
    },
    /// One line of raw code content (not to be inline-parsed).
    Code(Range),
    /// End of a fenced code block (also emitted at end of input).
    CodeBlockEnd,

    /// A plain line, left for the inline parser.
    Text(Range),

    /// A line boundary that no block construct consumed.
    LineBreak,
}

/// Type of list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`
    Unordered,
    /// `N. item`
    Ordered {
        /// The number written in the marker (saturating at `u32::MAX`).
        start: u32,
    },
}

impl ListKind {
    /// Whether two items belong in the same list container.
    #[inline]
    pub fn same_list(self, other: ListKind) -> bool {
        matches!(
            (self, other),
            (Self::Unordered, Self::Unordered) | (Self::Ordered { .. }, Self::Ordered { .. })
        )
    }
}

/// Task list item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Unchecked task `[ ]`.
    Unchecked,
    /// Checked task `[x]`.
    Checked,
}
