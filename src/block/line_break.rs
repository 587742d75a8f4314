//! Hard line breaks: a line ending in two spaces puts `<br />` at the start
//! of the next line.

use crate::driver::Context;
use crate::tag::Tag;

use super::BlockRule;

pub struct LineBreak;

impl BlockRule for LineBreak {
    fn name(&self) -> &'static str {
        "line_break"
    }

    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        let start = ctx.line_start;
        let input = ctx.cursor.input();
        let ended_with_two_spaces = start
            .checked_sub(3)
            .is_some_and(|from| &input[from..start] == b"  \n");
        if ended_with_two_spaces {
            ctx.emit_once(Tag::LineBreak);
        }
        false
    }
}
