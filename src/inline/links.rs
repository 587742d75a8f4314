//! Inline links `[text](url)` and images `![alt](url)`.
//!
//! Both are bounded by the current line: the first `"](` after the opening
//! bracket and the first `)` after that. If either is missing the markers
//! stay literal text.

use memchr::{memchr, memmem};

use crate::driver::Context;

use super::InlineRule;

pub struct Image;

pub struct Link;

/// Byte offsets of a `[label](target)` construct within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    /// End of the label, where `"](` starts.
    label_end: usize,
    /// End of the target, where `)` sits.
    target_end: usize,
}

/// Locate the `"](` and `)` of a construct whose label starts at `from`.
fn find_span(line: &[u8], from: usize) -> Option<Span> {
    let label_end = from + memmem::find(line.get(from..)?, b"](")?;
    let target_start = label_end + 2;
    let target_end = target_start + memchr(b')', &line[target_start..])?;
    Some(Span {
        label_end,
        target_end,
    })
}

impl InlineRule for Image {
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.options.links || ctx.state.code_open {
            return false;
        }
        let line = ctx.cursor.line_rest();
        if !line.starts_with(b"![") {
            return false;
        }
        let Some(span) = find_span(line, 2) else {
            return false;
        };

        ctx.write_str("<img alt=\"");
        ctx.write(&line[2..span.label_end]);
        ctx.write_str("\" src=\"");
        ctx.write(&line[span.label_end + 2..span.target_end]);
        ctx.write_str("\">");
        ctx.cursor.advance(span.target_end + 1);
        true
    }
}

impl InlineRule for Link {
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.options.links || ctx.state.code_open {
            return false;
        }
        let line = ctx.cursor.line_rest();
        if !line.starts_with(b"[") {
            return false;
        }
        let Some(span) = find_span(line, 1) else {
            return false;
        };

        ctx.write_str("<a href=\"");
        ctx.write(&line[span.label_end + 2..span.target_end]);
        ctx.write_str("\">");
        ctx.write(&line[1..span.label_end]);
        ctx.write_str("</a>");
        ctx.cursor.advance(span.target_end + 1);
        true
    }
}
