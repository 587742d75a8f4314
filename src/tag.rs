//! Deferred-tag stack.
//!
//! Block constructs stay open across arbitrary amounts of content. Instead of
//! one `close_*` routine per construct, every pending closing tag is recorded
//! here and emitted in strict reverse order of opening.

use smallvec::SmallVec;

use crate::limits::TAG_STACK_INLINE;
use crate::render::Sink;

/// Block-level tags tracked by the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<hN>`, tier 1-6.
    Heading(u8),
    Blockquote,
    /// `<br />`; has no closing form.
    LineBreak,
    Ul,
    Li,
    Table,
    Thead,
    Th,
    Tbody,
    Tr,
    Td,
}

impl Tag {
    /// HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heading(_) => "h",
            Self::Blockquote => "blockquote",
            Self::LineBreak => "br",
            Self::Ul => "ul",
            Self::Li => "li",
            Self::Table => "table",
            Self::Thead => "thead",
            Self::Th => "th",
            Self::Tbody => "tbody",
            Self::Tr => "tr",
            Self::Td => "td",
        }
    }

    /// Table structure tags end their markup with a newline.
    #[inline]
    pub fn trailing_newline(self) -> bool {
        matches!(self, Self::Table | Self::Thead | Self::Tbody | Self::Tr)
    }

    /// Tags closed at the end of the line that opened them.
    #[inline]
    pub fn is_line_scoped(self) -> bool {
        matches!(self, Self::Heading(_) | Self::Tr | Self::Th | Self::Td)
    }

    /// Table cell tags.
    #[inline]
    pub fn is_cell(self) -> bool {
        matches!(self, Self::Th | Self::Td)
    }
}

/// One pending action: emit the opening or the closing form of `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: Tag,
    pub close: bool,
}

impl TagEntry {
    #[inline]
    pub fn open(tag: Tag) -> Self {
        Self { tag, close: false }
    }

    #[inline]
    pub fn close(tag: Tag) -> Self {
        Self { tag, close: true }
    }

    /// Write this entry's markup.
    pub fn emit<S: Sink + ?Sized>(self, sink: &mut S) {
        match (self.tag, self.close) {
            (Tag::Heading(tier), false) => sink.heading_start(tier),
            (Tag::Heading(tier), true) => sink.heading_end(tier),
            (Tag::LineBreak, false) => sink.self_closing_tag("br"),
            (Tag::LineBreak, true) => {}
            (tag, false) => sink.open_tag(tag.name()),
            (tag, true) => sink.close_tag(tag.name()),
        }
        if self.tag.trailing_newline() {
            sink.newline();
        }
    }
}

/// LIFO of pending tag actions.
///
/// # Example
/// ```
/// use downhill::tag::{Tag, TagStack};
///
/// let mut stack = TagStack::new();
/// let mut out = Vec::new();
/// stack.add(Tag::Ul);
/// stack.pop(&mut out); // emits <ul>, </ul> stays queued
/// stack.add(Tag::Li);
/// stack.pop(&mut out);
/// out.extend_from_slice(b"item");
/// stack.flush(&mut out);
/// assert_eq!(out, b"<ul><li>item</li></ul>");
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TagStack {
    entries: SmallVec<[TagEntry; TAG_STACK_INLINE]>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a single entry.
    #[inline]
    pub fn push(&mut self, tag: Tag, close: bool) {
        self.entries.push(TagEntry { tag, close });
    }

    /// Queue the close of `tag` with its open on top of it.
    #[inline]
    pub fn add(&mut self, tag: Tag) {
        self.push(tag, true);
        self.push(tag, false);
    }

    /// Remove and emit the top entry. No-op on an empty stack.
    pub fn pop<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Option<TagEntry> {
        let entry = self.entries.pop()?;
        entry.emit(sink);
        Some(entry)
    }

    /// Pop until empty.
    pub fn flush<S: Sink + ?Sized>(&mut self, sink: &mut S) {
        self.flush_with(sink, |_| {});
    }

    /// Pop until empty, handing each emitted entry to `on_pop`.
    pub fn flush_with<S, F>(&mut self, sink: &mut S, mut on_pop: F)
    where
        S: Sink + ?Sized,
        F: FnMut(TagEntry),
    {
        while let Some(entry) = self.pop(sink) {
            on_pop(entry);
        }
    }

    /// The entry the next `pop` would emit.
    #[inline]
    pub fn top(&self) -> Option<TagEntry> {
        self.entries.last().copied()
    }

    /// True if a close of `tag` is still pending.
    pub fn contains_close(&self, tag: Tag) -> bool {
        self.entries.iter().any(|e| e.close && e.tag == tag)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
