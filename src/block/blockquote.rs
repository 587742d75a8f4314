//! Blockquotes.
//!
//! Consecutive `>` lines form one `<blockquote>`; the first line without
//! the marker closes it together with anything nested inside.

use crate::driver::Context;
use crate::tag::Tag;

use super::BlockRule;

pub struct Blockquote;

impl BlockRule for Blockquote {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        if !ctx.cursor.at(b'>') {
            ctx.close_while(|s| s.blockquote_open);
            return false;
        }

        if !ctx.state.blockquote_open {
            // A quote is always the outermost container.
            ctx.close_all();
            ctx.open(Tag::Blockquote);
        }
        ctx.cursor.bump();
        if ctx.cursor.at(b' ') {
            ctx.cursor.bump();
        }
        // The rest of the line may still be a list or a table.
        false
    }
}

/// A quoted line without its `>` marker and the optional space after it.
pub(super) fn strip_marker(line: &[u8]) -> Option<&[u8]> {
    let rest = line.strip_prefix(b">")?;
    Some(rest.strip_prefix(b" ").unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker(b"> | - |"), Some(&b"| - |"[..]));
        assert_eq!(strip_marker(b">| - |"), Some(&b"| - |"[..]));
        assert_eq!(strip_marker(b">"), Some(&b""[..]));
        assert_eq!(strip_marker(b"| - |"), None);
    }
}
