//! Emphasis runs: `*` / `_` of length 1, 2 or 3.
//!
//! Two resolution strategies, selected by [`EmphasisMode`]:
//!
//! - `Toggle`: a single open flag. Every run flips it; a closing run emits
//!   the closing tags of its own length, whatever opened the span.
//! - `Nested`: a stack of open spans keyed by strength and marker byte. A run
//!   closes the innermost matching span (closing and reopening any span
//!   opened after it) or opens a new one. Spans do not cross a newline.

use smallvec::SmallVec;

use crate::driver::Context;
use crate::limits::{MAX_EMPHASIS_NESTING, MAX_EMPHASIS_RUN};
use crate::state::{Emphasis, EmphasisSpan};
use crate::EmphasisMode;

use super::InlineRule;

pub struct EmphasisRun;

impl InlineRule for EmphasisRun {
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if ctx.state.code_open {
            return false;
        }
        let rest = ctx.cursor.line_rest();
        let marker = match rest.first() {
            Some(&b @ (b'*' | b'_')) => b,
            _ => return false,
        };
        let run = rest.iter().take_while(|&&b| b == b'*' || b == b'_').count();

        let handled = match Emphasis::from_run(run) {
            Some(kind) => match ctx.options.emphasis {
                EmphasisMode::Toggle => {
                    toggle(ctx, kind);
                    true
                }
                EmphasisMode::Nested => nested(ctx, kind, marker),
            },
            None => {
                debug_assert!(run > MAX_EMPHASIS_RUN);
                false
            }
        };
        if !handled {
            ctx.write(&rest[..run]);
        }
        ctx.cursor.advance(run);
        true
    }
}

fn toggle(ctx: &mut Context<'_, '_>, kind: Emphasis) {
    match ctx.state.emphasis_open.take() {
        Some(_) => ctx.write_str(kind.close_markup()),
        None => {
            ctx.write_str(kind.open_markup());
            ctx.state.emphasis_open = Some(kind);
        }
    }
}

/// Returns false when the run is left as literal text.
fn nested(ctx: &mut Context<'_, '_>, kind: Emphasis, marker: u8) -> bool {
    let spans = &ctx.state.emphasis_spans;
    let Some(idx) = spans.iter().rposition(|&span| span == (kind, marker)) else {
        if spans.len() >= MAX_EMPHASIS_NESTING {
            return false;
        }
        ctx.write_str(kind.open_markup());
        ctx.state.emphasis_spans.push((kind, marker));
        return true;
    };

    let inner: SmallVec<[EmphasisSpan; 4]> = ctx.state.emphasis_spans.drain(idx + 1..).collect();
    for &(span, _) in inner.iter().rev() {
        ctx.write_str(span.close_markup());
    }
    ctx.write_str(kind.close_markup());
    ctx.state.emphasis_spans.pop();
    for &(span, _) in &inner {
        ctx.write_str(span.open_markup());
    }
    ctx.state.emphasis_spans.extend(inner);
    true
}

pub(super) fn end_line(ctx: &mut Context<'_, '_>) {
    if ctx.options.emphasis == EmphasisMode::Nested {
        close_all(ctx);
    }
}

/// Close every open span, innermost first.
pub(super) fn close_all(ctx: &mut Context<'_, '_>) {
    if let Some(kind) = ctx.state.emphasis_open.take() {
        ctx.write_str(kind.close_markup());
    }
    while let Some((kind, _)) = ctx.state.emphasis_spans.pop() {
        ctx.write_str(kind.close_markup());
    }
}
