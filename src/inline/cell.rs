//! Table cell boundaries inside a row.

use crate::driver::Context;

use super::InlineRule;

pub struct TableCell;

impl InlineRule for TableCell {
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.state.table_open || ctx.state.code_open {
            return false;
        }
        let cell = match ctx.stack.top() {
            Some(top) if top.close && top.tag.is_cell() => top.tag,
            _ => return false,
        };

        let rest = ctx.cursor.line_rest();
        match rest.first() {
            Some(b'|') => {
                let trailing = &rest[1..];
                if is_blank(trailing) {
                    // Closing pipe of the row; the cell ends with the line.
                    ctx.cursor.advance(rest.len());
                } else {
                    ctx.pop();
                    ctx.open(cell);
                    ctx.cursor.bump();
                    ctx.cursor.skip_whitespace();
                }
                true
            }
            Some(b' ' | b'\t') => {
                let n = rest.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
                // Padding before a pipe or the line end is dropped, inner
                // spacing is copied through in one go.
                if !matches!(rest.get(n), None | Some(b'|')) {
                    ctx.write(&rest[..n]);
                }
                ctx.cursor.advance(n);
                true
            }
            _ => false,
        }
    }
}

#[inline]
fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_whitespace())
}
