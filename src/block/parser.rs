//! Block segmenter implementation.

use smallvec::SmallVec;

use crate::cursor::{Cursor, Line};
use crate::Range;

use super::event::{BlockEvent, ListKind, TaskState};

/// Cells of one table line, collected before we know whether the line is
/// a separator.
type Cells = SmallVec<[Range; 8]>;

/// Block segmenter state.
///
/// Works on the escaped document: blockquote markers are therefore
/// `&gt; ` rather than `> `.
pub struct BlockParser<'a> {
    /// Escaped input.
    input: &'a str,
    /// Line cursor.
    cursor: Cursor<'a>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser over escaped text.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
        }
    }

    /// Parse all blocks and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while let Some(line) = self.cursor.next_line() {
            self.parse_line(line, events);
        }
    }

    /// Parse a single line (and, for fences and tables, the lines that
    /// belong to the same construct).
    fn parse_line(&mut self, line: Line, events: &mut Vec<BlockEvent>) {
        if let Some(last) = self.try_code_fence(line, events) {
            self.end_line(last, events);
            return;
        }

        if let Some(last) = self.try_table(line, events) {
            self.end_line(last, events);
            return;
        }

        events.push(self.classify(line.content));
        self.end_line(line, events);
    }

    /// Emit the line break for a line's terminator, if it has one.
    #[inline]
    fn end_line(&self, line: Line, events: &mut Vec<BlockEvent>) {
        if line.has_newline {
            events.push(BlockEvent::LineBreak);
        }
    }

    /// Classify a single non-fence, non-table line.
    ///
    /// Task items are tested before plain bullets since they are a
    /// specialization of them.
    fn classify(&self, content: Range) -> BlockEvent {
        let bytes = content.bytes(self.input);

        if let Some(event) = self.try_atx_heading(content) {
            return event;
        }

        if content.trim(self.input).bytes(self.input) == b"---" {
            return BlockEvent::ThematicBreak;
        }

        if let Some(rest) = marker_content(bytes, b"&gt; ") {
            return BlockEvent::BlockQuote(content.skip(bytes.len() - rest));
        }

        if let Some(rest) = marker_content(bytes, b"- [x] ") {
            return BlockEvent::TaskItem {
                state: TaskState::Checked,
                content: content.skip(bytes.len() - rest),
            };
        }

        if let Some(rest) = marker_content(bytes, b"- [ ] ") {
            return BlockEvent::TaskItem {
                state: TaskState::Unchecked,
                content: content.skip(bytes.len() - rest),
            };
        }

        if let Some(rest) = marker_content(bytes, b"- ") {
            return BlockEvent::ListItem {
                kind: ListKind::Unordered,
                content: content.skip(bytes.len() - rest),
            };
        }

        if let Some((start, marker_len)) = ordered_marker(bytes) {
            return BlockEvent::ListItem {
                kind: ListKind::Ordered { start },
                content: content.skip(marker_len),
            };
        }

        BlockEvent::Text(content)
    }

    /// Try to parse a heading of exactly one to four hashes.
    fn try_atx_heading(&self, content: Range) -> Option<BlockEvent> {
        let bytes = content.bytes(self.input);
        let level = bytes.iter().take_while(|&&b| b == b'#').count();

        // Exact count: a fifth hash disqualifies the line entirely
        if level == 0 || level > 4 {
            return None;
        }

        marker_content(&bytes[level..], b" ")?;

        Some(BlockEvent::Heading {
            level: level as u8,
            content: content.skip(level + 1),
        })
    }

    /// Try to parse a fenced code block starting at `line`.
    ///
    /// Returns the last line consumed by the block so the caller can emit
    /// the break after it. An unclosed fence runs to the end of input.
    fn try_code_fence(&mut self, line: Line, events: &mut Vec<BlockEvent>) -> Option<Line> {
        let bytes = line.content.bytes(self.input);
        let fence_len = bytes.iter().take_while(|&&b| b == b'`').count();
        if fence_len < 3 {
            return None;
        }

        // Info string cannot contain backticks
        let info = line.content.skip(fence_len).trim(self.input);
        if info.bytes(self.input).contains(&b'`') {
            return None;
        }

        events.push(BlockEvent::CodeBlockStart {
            info: (!info.is_empty()).then_some(info),
        });

        let mut last = line;
        while let Some(next) = self.cursor.next_line() {
            last = next;
            if self.is_closing_fence(next.content) {
                events.push(BlockEvent::CodeBlockEnd);
                return Some(last);
            }
            // The empty tail after a final newline is not code
            if next.has_newline || !next.content.is_empty() {
                events.push(BlockEvent::Code(next.content));
            }
        }

        events.push(BlockEvent::CodeBlockEnd);
        Some(last)
    }

    /// A closing fence is three or more backticks and nothing else.
    fn is_closing_fence(&self, content: Range) -> bool {
        let trimmed = content.trim(self.input).bytes(self.input);
        trimmed.len() >= 3 && trimmed.iter().all(|&b| b == b'`')
    }

    /// Try to parse a run of adjacent table lines starting at `line`.
    ///
    /// The whole run is one table; breaks between its lines are consumed.
    /// A run with no data rows (only separators) produces no table at all.
    fn try_table(&mut self, line: Line, events: &mut Vec<BlockEvent>) -> Option<Line> {
        let first = self.table_cells(line.content)?;

        let mut rows: SmallVec<[Cells; 4]> = SmallVec::new();
        rows.push(first);

        let mut last = line;
        while last.has_newline {
            let Some(next) = self.cursor.peek_line() else {
                break;
            };
            let Some(cells) = self.table_cells(next.content) else {
                break;
            };
            self.cursor.next_line();
            rows.push(cells);
            last = next;
        }

        let has_data = rows.iter().any(|cells| !self.is_separator(cells));
        if has_data {
            events.push(BlockEvent::TableStart);
        }
        for cells in &rows {
            if self.is_separator(cells) {
                events.push(BlockEvent::TableSeparator);
                continue;
            }
            events.push(BlockEvent::TableRowStart);
            events.extend(cells.iter().map(|&cell| BlockEvent::TableCell(cell)));
            events.push(BlockEvent::TableRowEnd);
        }
        if has_data {
            events.push(BlockEvent::TableEnd);
        }

        Some(last)
    }

    /// Split a `|a|b|` line into trimmed cells, or `None` if the line is
    /// not a table line.
    fn table_cells(&self, content: Range) -> Option<Cells> {
        let bytes = content.bytes(self.input);
        if bytes.len() < 3 || bytes[0] != b'|' || bytes[bytes.len() - 1] != b'|' {
            return None;
        }

        let inner_start = content.start_usize() + 1;
        let inner_end = content.end_usize() - 1;
        let mut cells = Cells::new();
        let mut cell_start = inner_start;
        for pos in memchr::memchr_iter(b'|', &self.input.as_bytes()[inner_start..inner_end]) {
            let at = inner_start + pos;
            cells.push(Range::from_usize(cell_start, at).trim(self.input));
            cell_start = at + 1;
        }
        cells.push(Range::from_usize(cell_start, inner_end).trim(self.input));

        Some(cells)
    }

    /// A separator line has only `-`/`:` runs in every cell.
    fn is_separator(&self, cells: &[Range]) -> bool {
        cells.iter().all(|cell| {
            let bytes = cell.bytes(self.input);
            !bytes.is_empty() && bytes.iter().all(|&b| b == b'-' || b == b':')
        })
    }
}

/// If `line` starts with `marker` and has content after it, return the
/// length of that content.
#[inline]
fn marker_content(line: &[u8], marker: &[u8]) -> Option<usize> {
    (line.len() > marker.len() && line.starts_with(marker)).then(|| line.len() - marker.len())
}

/// Parse an ordered list marker (`12. `), returning the number and the
/// marker length including the space.
fn ordered_marker(line: &[u8]) -> Option<(u32, usize)> {
    let digits = line.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    marker_content(&line[digits..], b". ")?;

    let start = line[..digits].iter().fold(0u32, |n, &d| {
        n.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    });
    Some((start, digits + 2))
}
