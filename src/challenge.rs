//! Practice challenges.
//!
//! Each challenge asks for one construct and checks the raw, unrendered
//! answer with its own pattern. The renderer is never involved.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

static HEADING_1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s*Hello\s*$").unwrap());

static HEADING_2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s*Study Notes\s*$").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*important\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*emphasis\*").unwrap());

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*very important\*\*\*").unwrap());

static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~outdated~~").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`console\.log`").unwrap());

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s*Apple\s*$").unwrap());

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\.\s*Step one\s*$").unwrap());

static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*Knowledge is power\s*$").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[click here\]\(.+\)").unwrap());

static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\[\s*\]\s*Learn Markdown\s*$").unwrap());

static DONE_TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\[x\]\s*Install software\s*$").unwrap());

static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"==keyword==").unwrap());

static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---$").unwrap());

/// How a challenge pattern is applied to an answer.
#[derive(Debug, Clone, Copy)]
enum Check {
    /// The whole trimmed answer must match.
    Line(&'static LazyLock<Regex>),
    /// A match anywhere in the answer.
    Anywhere(&'static LazyLock<Regex>),
    /// A match anywhere that is not touched by a further `*` on either
    /// side, so `**x**` does not count as `*x*`.
    Unstarred(&'static LazyLock<Regex>),
}

/// One practice exercise.
#[derive(Debug)]
pub struct Challenge {
    /// Short name.
    pub title: &'static str,
    /// What the user is asked to write.
    pub task: &'static str,
    /// An answer that passes.
    pub hint: &'static str,
    check: Check,
}

impl Challenge {
    /// Check a raw answer.
    pub fn validate(&self, raw: &str) -> bool {
        match self.check {
            Check::Line(re) => re.is_match(raw.trim()),
            Check::Anywhere(re) => re.is_match(raw),
            Check::Unstarred(re) => unstarred_match(re, raw),
        }
    }
}

/// Find a match with no `*` directly before or after it.
///
/// Candidates are retried one char past each rejected start so that
/// overlapping occurrences are still seen.
fn unstarred_match(re: &Regex, raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut pos = 0;
    while let Some(m) = re.find_at(raw, pos) {
        let before = m.start() > 0 && bytes[m.start() - 1] == b'*';
        let after = bytes.get(m.end()) == Some(&b'*');
        if !before && !after {
            return true;
        }
        pos = m.start() + 1;
    }
    false
}

/// The practice exercises, in order.
pub static CHALLENGES: &[Challenge] = &[
    Challenge {
        title: "Heading 1",
        task: "Create a level 1 heading: \"Hello\"",
        hint: "# Hello",
        check: Check::Line(&HEADING_1_RE),
    },
    Challenge {
        title: "Heading 2",
        task: "Create a level 2 heading: \"Study Notes\"",
        hint: "## Study Notes",
        check: Check::Line(&HEADING_2_RE),
    },
    Challenge {
        title: "Bold",
        task: "Make the word \"important\" bold",
        hint: "**important**",
        check: Check::Anywhere(&BOLD_RE),
    },
    Challenge {
        title: "Italic",
        task: "Make the word \"emphasis\" italic",
        hint: "*emphasis*",
        check: Check::Unstarred(&ITALIC_RE),
    },
    Challenge {
        title: "Bold italic",
        task: "Make \"very important\" bold and italic",
        hint: "***very important***",
        check: Check::Anywhere(&BOLD_ITALIC_RE),
    },
    Challenge {
        title: "Strikethrough",
        task: "Strike through \"outdated\"",
        hint: "~~outdated~~",
        check: Check::Anywhere(&STRIKE_RE),
    },
    Challenge {
        title: "Inline code",
        task: "Format console.log as inline code",
        hint: "`console.log`",
        check: Check::Anywhere(&CODE_RE),
    },
    Challenge {
        title: "Bulleted list",
        task: "Create a bulleted list item: \"Apple\"",
        hint: "- Apple",
        check: Check::Line(&BULLET_RE),
    },
    Challenge {
        title: "Numbered list",
        task: "Create the first numbered list item: \"Step one\"",
        hint: "1. Step one",
        check: Check::Line(&NUMBERED_RE),
    },
    Challenge {
        title: "Quote",
        task: "Quote \"Knowledge is power\"",
        hint: "> Knowledge is power",
        check: Check::Line(&QUOTE_RE),
    },
    Challenge {
        title: "Link",
        task: "Create a link with the text \"click here\"",
        hint: "[click here](url)",
        check: Check::Anywhere(&LINK_RE),
    },
    Challenge {
        title: "Task",
        task: "Create an open task: \"Learn Markdown\"",
        hint: "- [ ] Learn Markdown",
        check: Check::Line(&TASK_RE),
    },
    Challenge {
        title: "Completed task",
        task: "Create a completed task: \"Install software\"",
        hint: "- [x] Install software",
        check: Check::Line(&DONE_TASK_RE),
    },
    Challenge {
        title: "Highlight",
        task: "Highlight \"keyword\"",
        hint: "==keyword==",
        check: Check::Anywhere(&HIGHLIGHT_RE),
    },
    Challenge {
        title: "Horizontal rule",
        task: "Create a horizontal rule",
        hint: "---",
        check: Check::Line(&RULE_RE),
    },
];

/// Progress through [`CHALLENGES`].
///
/// A passing answer marks the current challenge complete and moves on to
/// the next one; the last challenge stays current once solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: usize,
    completed: Vec<bool>,
}

impl Session {
    /// Start at the first challenge with nothing completed.
    pub fn new() -> Self {
        Self {
            current: 0,
            completed: vec![false; CHALLENGES.len()],
        }
    }

    /// Index of the current challenge.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current challenge.
    #[inline]
    pub fn current(&self) -> &'static Challenge {
        &CHALLENGES[self.current]
    }

    /// Jump to a challenge. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < CHALLENGES.len() {
            self.current = index;
        }
    }

    /// Check an answer against the current challenge.
    pub fn submit(&mut self, raw: &str) -> bool {
        let passed = self.current().validate(raw);
        debug!(
            "challenge {} ({}): {}",
            self.current + 1,
            self.current().title,
            if passed { "passed" } else { "failed" }
        );
        if passed {
            self.completed[self.current] = true;
            if self.current + 1 < CHALLENGES.len() {
                self.current += 1;
            }
        }
        passed
    }

    /// Whether a challenge has been solved.
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// Number of solved challenges.
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&done| done).count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
