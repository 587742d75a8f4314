//! Pipe tables.
//!
//! ```text
//! | a | b |     header row  -> <thead>
//! | - | - |     delimiter   -> dropped
//! | c | d |     body rows   -> <tbody>
//! ```
//!
//! This rule opens rows and their first cell; the cell boundaries inside a
//! row are handled by the inline cell rule.

use crate::driver::Context;
use crate::tag::Tag;

use super::{BlockRule, blockquote};

pub struct Table;

impl BlockRule for Table {
    fn name(&self) -> &'static str {
        "table"
    }

    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.cursor.at(b'|') {
            ctx.close_while(|s| s.table_open);
            return false;
        }

        if !ctx.state.table_open {
            let mut delimiter = ctx.cursor.next_line();
            if ctx.state.blockquote_open {
                delimiter = delimiter.and_then(blockquote::strip_marker);
            }
            if !delimiter.is_some_and(is_delimiter_row) {
                return false;
            }
            ctx.open(Tag::Table);
            ctx.open(Tag::Thead);
            ctx.open(Tag::Tr);
            ctx.open(Tag::Th);
            ctx.state.skip_rest_of_line = true;
        } else {
            if ctx.state.in_header_row {
                ctx.close_through(Tag::Thead);
                ctx.open(Tag::Tbody);
            }
            ctx.open(Tag::Tr);
            ctx.open(Tag::Td);
        }

        ctx.cursor.bump();
        ctx.cursor.skip_whitespace();
        true
    }
}

/// `|`, optional spaces, then `-`.
fn is_delimiter_row(line: &[u8]) -> bool {
    let Some(rest) = line.strip_prefix(b"|") else {
        return false;
    };
    rest.iter().find(|&&b| b != b' ') == Some(&b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_row() {
        assert!(is_delimiter_row(b"| - | - |"));
        assert!(is_delimiter_row(b"|---|---|"));
        assert!(is_delimiter_row(b"|    ---"));
        assert!(!is_delimiter_row(b"| a | b |"));
        assert!(!is_delimiter_row(b"- | -"));
        assert!(!is_delimiter_row(b"|"));
        assert!(!is_delimiter_row(b""));
    }
}
