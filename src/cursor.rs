//! Line-oriented cursor over the escaped document.
//!
//! The block segmenter only ever needs "give me the next line"; this
//! wraps that in a small copyable cursor that finds line ends with
//! `memchr` and hands back ranges instead of slices.

use memchr::memchr;

use crate::Range;

/// A cursor that walks a buffer one line at a time.
///
/// # Example
/// ```
/// use livemark::cursor::Cursor;
///
/// let text = "one\ntwo";
/// let mut cursor = Cursor::new(text);
/// let first = cursor.next_line().unwrap();
/// assert_eq!(first.content.slice(text), "one");
/// assert!(first.has_newline);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    /// Set once the final line (the one with no `\n` after it) was taken.
    done: bool,
}

/// One line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Line content without its terminator (`\n` or `\r\n`).
    pub content: Range,
    /// Whether a `\n` follows this line.
    pub has_newline: bool,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a string.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            done: false,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Check if every line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.done
    }

    /// Take the next line.
    ///
    /// An input of `n` newlines has `n + 1` lines; the empty string is a
    /// single empty line.
    pub fn next_line(&mut self) -> Option<Line> {
        if self.done {
            return None;
        }

        let start = self.pos;
        let (end, has_newline) = match memchr(b'\n', &self.input[start..]) {
            Some(offset) => (start + offset, true),
            None => (self.input.len(), false),
        };

        // CRLF input: the carriage return belongs to the terminator
        let content_end = if end > start && self.input[end - 1] == b'\r' && has_newline {
            end - 1
        } else {
            end
        };

        if has_newline {
            self.pos = end + 1;
        } else {
            self.pos = end;
            self.done = true;
        }

        Some(Line {
            content: Range::from_usize(start, content_end),
            has_newline,
        })
    }

    /// Look at the next line without consuming it.
    #[inline]
    pub fn peek_line(&self) -> Option<Line> {
        let mut ahead = *self;
        ahead.next_line()
    }
}
