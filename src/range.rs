//! Compact byte ranges into the escaped document.
//!
//! Every block and inline structure refers back into a single escaped
//! buffer instead of copying its text. `u32` offsets keep a range at
//! 8 bytes, which bounds documents at 4 GiB.

/// Byte range into a `str` buffer.
///
/// Both ends always sit on UTF-8 character boundaries: the parsers only
/// ever split around ASCII markup bytes.
///
/// # Example
/// ```
/// use livemark::Range;
///
/// let text = "Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.slice(text), "World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Create an empty range at a position.
    #[inline]
    pub const fn empty_at(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// The text this range covers.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start as usize..self.end as usize]
    }

    /// The bytes this range covers.
    #[inline]
    pub fn bytes<'a>(&self, text: &'a str) -> &'a [u8] {
        &text.as_bytes()[self.start as usize..self.end as usize]
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Shrink the range past leading and trailing ASCII spaces and tabs.
    pub fn trim(&self, text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut start = self.start_usize();
        let mut end = self.end_usize();
        while start < end && matches!(bytes[start], b' ' | b'\t') {
            start += 1;
        }
        while end > start && matches!(bytes[end - 1], b' ' | b'\t') {
            end -= 1;
        }
        Self::from_usize(start, end)
    }

    /// Range starting `n` bytes later.
    #[inline]
    pub fn skip(&self, n: usize) -> Self {
        debug_assert!(n <= self.len() as usize);
        Self::from_usize(self.start_usize() + n, self.end_usize())
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    #[inline]
    fn from(r: Range) -> Self {
        r.start_usize()..r.end_usize()
    }
}
