//! Code spans.
//!
//! A backtick toggles a `<pre>` span. Nothing else is recognized inside.

use crate::driver::Context;

use super::InlineRule;

pub struct CodeSpan;

impl InlineRule for CodeSpan {
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.cursor.at(b'`') {
            return false;
        }
        if ctx.state.code_open {
            ctx.sink().close_tag("pre");
        } else {
            ctx.sink().open_tag("pre");
        }
        ctx.state.code_open = !ctx.state.code_open;
        ctx.cursor.bump();
        true
    }
}

/// Close a span left open at end of input.
pub(super) fn close(ctx: &mut Context<'_, '_>) {
    if ctx.state.code_open {
        ctx.sink().close_tag("pre");
        ctx.state.code_open = false;
    }
}
