//! Per-render parse state.

use smallvec::SmallVec;

use crate::tag::{Tag, TagEntry};

/// Emphasis strength selected by the length of a `*`/`_` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `*x*` → `<i>`
    Italic,
    /// `**x**` → `<b>`
    Bold,
    /// `***x***` → `<b><i>`
    BoldItalic,
}

impl Emphasis {
    /// Map a marker run length to its emphasis, if it is one.
    #[inline]
    pub fn from_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Italic),
            2 => Some(Self::Bold),
            3 => Some(Self::BoldItalic),
            _ => None,
        }
    }

    pub fn open_markup(self) -> &'static str {
        match self {
            Self::Italic => "<i>",
            Self::Bold => "<b>",
            Self::BoldItalic => "<b><i>",
        }
    }

    pub fn close_markup(self) -> &'static str {
        match self {
            Self::Italic => "</i>",
            Self::Bold => "</b>",
            Self::BoldItalic => "</i></b>",
        }
    }
}

/// An open span in nested emphasis mode: its strength and marker byte.
pub type EmphasisSpan = (Emphasis, u8);

/// Flags and counters scoped to one render call.
///
/// The block flags mirror the deferred-tag stack and are only changed by
/// [`ParseState::apply`], which the driver calls for every emitted entry.
#[derive(Debug, Default)]
pub struct ParseState {
    /// 0 when no header is open, otherwise 1-6.
    pub header_tier: u8,
    pub blockquote_open: bool,
    /// Open `<ul>` count, 0-2.
    pub list_depth: u8,
    pub table_open: bool,
    /// Inside `<thead>`.
    pub in_header_row: bool,
    /// Inside `<tbody>`.
    pub in_body_row: bool,
    /// Inside a backtick code span.
    pub code_open: bool,
    /// Toggle-mode emphasis; `Some` while a span is open.
    pub emphasis_open: Option<Emphasis>,
    /// Nested-mode emphasis spans, innermost last.
    pub emphasis_spans: SmallVec<[EmphasisSpan; 4]>,
    /// Drop the next line without scanning it.
    pub skip_rest_of_line: bool,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflect an emitted stack entry in the block flags.
    pub fn apply(&mut self, entry: TagEntry) {
        let open = !entry.close;
        match entry.tag {
            Tag::Heading(tier) => self.header_tier = if open { tier } else { 0 },
            Tag::Blockquote => self.blockquote_open = open,
            Tag::Ul => {
                if open {
                    self.list_depth += 1;
                } else {
                    self.list_depth = self.list_depth.saturating_sub(1);
                }
            }
            Tag::Table => {
                self.table_open = open;
                if !open {
                    self.in_header_row = false;
                    self.in_body_row = false;
                }
            }
            Tag::Thead => self.in_header_row = open,
            Tag::Tbody => self.in_body_row = open,
            Tag::LineBreak | Tag::Li | Tag::Th | Tag::Tr | Tag::Td => {}
        }
    }
}
