//! Fixed bounds of the supported dialect.
//!
//! These keep every construct's depth and width finite so that no input
//! can grow the scanner's state without bound.

/// Highest header tier; longer `#` runs clamp to it.
pub const MAX_HEADER_TIER: u8 = 6;

/// Deepest supported list nesting; deeper indentation saturates here.
pub const MAX_LIST_DEPTH: u8 = 2;

/// Longest `*`/`_` run treated as an emphasis marker (`***`).
/// Longer runs are literal text.
pub const MAX_EMPHASIS_RUN: usize = 3;

/// Maximum open emphasis spans in nested mode; further openers are literal.
pub const MAX_EMPHASIS_NESTING: usize = 4;

/// Inline capacity of the deferred-tag stack before it spills to the heap.
pub const TAG_STACK_INLINE: usize = 20;
