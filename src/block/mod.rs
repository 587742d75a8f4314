//! Block-level detectors.
//!
//! Block rules run only on the first byte of a line, in a fixed priority
//! order:
//! - Headers (ATX and setext)
//! - Blockquotes
//! - Hard line breaks
//! - Lists (two levels)
//! - Tables
//!
//! The driver stops at the first rule that claims the line. For that early
//! stop to be safe every rule follows two conventions: a rule that does not
//! match closes its own construct if it is open, and a rule that claims the
//! line first closes whatever open construct cannot contain it.

mod blockquote;
mod header;
mod line_break;
mod list;
mod table;

pub use blockquote::Blockquote;
pub use header::Header;
pub use line_break::LineBreak;
pub use list::List;
pub use table::Table;

use crate::driver::Context;

/// A detector for one block construct.
pub trait BlockRule {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Inspect the line at the cursor. Returns true when this rule claimed
    /// the line and no later rule should run.
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool;
}

/// The block rules in priority order.
pub fn rules() -> [&'static dyn BlockRule; 5] {
    [&Header, &Blockquote, &LineBreak, &List, &Table]
}
