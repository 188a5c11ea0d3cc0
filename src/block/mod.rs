//! Block-level segmenter.
//!
//! Line-oriented. Each line becomes at most one block event, except for
//! fenced code blocks and table runs which swallow the lines they span:
//! - ATX headings (levels 1-4)
//! - Thematic breaks
//! - Blockquote lines
//! - Task items and list items
//! - Tables
//! - Fenced code blocks
//! - Plain text lines

mod event;
mod parser;

pub use event::{BlockEvent, ListKind, TaskState};
pub use parser::BlockParser;
