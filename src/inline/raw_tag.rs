//! Allowlisted raw tags.
//!
//! The escaper turns every `<` and `>` of the input into entities. Only the
//! escaped spellings of the tags below are ever turned back into markup,
//! and only as matched open/close pairs.

/// A raw inline tag that survives escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedTag {
    /// `<u>` underline.
    Underline,
    /// `<sup>` superscript.
    Superscript,
    /// `<sub>` subscript.
    Subscript,
}

impl AllowedTag {
    /// Every allowed tag, in the order they are matched.
    pub const ALL: [AllowedTag; 3] = [Self::Underline, Self::Superscript, Self::Subscript];

    /// HTML tag name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Underline => "u",
            Self::Superscript => "sup",
            Self::Subscript => "sub",
        }
    }

    /// Opening tag as it appears in escaped text.
    #[inline]
    pub const fn escaped_open(self) -> &'static str {
        match self {
            Self::Underline => "&lt;u&gt;",
            Self::Superscript => "&lt;sup&gt;",
            Self::Subscript => "&lt;sub&gt;",
        }
    }

    /// Closing tag as it appears in escaped text.
    #[inline]
    pub const fn escaped_close(self) -> &'static str {
        match self {
            Self::Underline => "&lt;/u&gt;",
            Self::Superscript => "&lt;/sup&gt;",
            Self::Subscript => "&lt;/sub&gt;",
        }
    }

    /// Look up a tag by name. Case-sensitive: `<U>` stays escaped.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}
