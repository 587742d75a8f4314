//! Unordered lists, two levels deep.
//!
//! `* item` is a top-level item; tabs before the marker make a nested item.
//! Deeper indentation saturates at the nested level.

use crate::driver::Context;
use crate::limits::MAX_LIST_DEPTH;
use crate::tag::Tag;

use super::BlockRule;

pub struct List;

impl BlockRule for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        let Some(marker) = parse_marker(ctx.cursor.line_rest()) else {
            ctx.close_while(|s| s.list_depth > 0);
            return false;
        };

        ctx.close_while(|s| s.table_open);

        // A nested marker without a parent item starts a top-level item.
        let target = if ctx.state.list_depth == 0 { 1 } else { marker.depth };

        while ctx.state.list_depth > target {
            ctx.close_through(Tag::Ul);
        }
        if ctx.state.list_depth == target {
            ctx.close_through(Tag::Li);
        } else {
            ctx.open(Tag::Ul);
        }
        ctx.open(Tag::Li);

        ctx.cursor.advance(marker.len);
        true
    }
}

/// A recognized item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    /// Target nesting level, 1 or 2.
    depth: u8,
    /// Bytes taken by the indentation and `"* "`.
    len: usize,
}

fn parse_marker(line: &[u8]) -> Option<Marker> {
    let tabs = line.iter().take_while(|&&b| b == b'\t').count();
    if !line[tabs..].starts_with(b"* ") {
        return None;
    }
    let depth = (1 + tabs / 2).min(MAX_LIST_DEPTH as usize) as u8;
    Some(Marker {
        depth,
        len: tabs + 2,
    })
}
