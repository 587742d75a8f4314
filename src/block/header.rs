//! ATX (`# Title`) and setext (`Title` / `=====`) headers.

use crate::driver::Context;
use crate::limits::MAX_HEADER_TIER;
use crate::tag::Tag;

use super::{BlockRule, LineBreak};

pub struct Header;

impl BlockRule for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool {
        let hashes = ctx.cursor.count_while(|b| b == b'#');
        if hashes > 0 {
            let tier = hashes.min(MAX_HEADER_TIER as usize) as u8;
            open_header(ctx, tier);
            ctx.cursor.advance(hashes);
            ctx.cursor.skip_whitespace();
            return true;
        }

        let Some(tier) = ctx.cursor.next_line().and_then(underline_tier) else {
            return false;
        };
        open_header(ctx, tier);
        ctx.state.skip_rest_of_line = true;
        true
    }
}

fn open_header(ctx: &mut Context<'_, '_>, tier: u8) {
    // The header claims the line, so the break rule after it never runs.
    LineBreak.try_match(ctx);
    ctx.close_all();
    ctx.open(Tag::Heading(tier));
}

/// Tier of a setext underline, decided by its first byte: `=` (1) or `-` (2).
fn underline_tier(line: &[u8]) -> Option<u8> {
    match line.first()? {
        b'=' => Some(1),
        b'-' => Some(2),
        _ => None,
    }
}
