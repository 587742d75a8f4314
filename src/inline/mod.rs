//! Inline detectors.
//!
//! Offered every byte of a line except the newline, in this order:
//! 1. Code spans (suppress everything below while open)
//! 2. Table cell boundaries
//! 3. Emphasis
//! 4. Images
//! 5. Links
//!
//! The first rule that consumes input wins; when none does, the driver
//! copies the byte through.

mod cell;
mod code_span;
mod emphasis;
mod links;

pub use cell::TableCell;
pub use code_span::CodeSpan;
pub use emphasis::EmphasisRun;
pub use links::{Image, Link};

use crate::driver::Context;

/// A detector for one inline construct.
pub trait InlineRule {
    /// Try to consume input at the cursor. Returns true if anything was
    /// consumed (and emitted).
    fn try_match(&self, ctx: &mut Context<'_, '_>) -> bool;
}

/// The inline rules in priority order.
pub fn rules() -> [&'static dyn InlineRule; 5] {
    [&CodeSpan, &TableCell, &EmphasisRun, &Image, &Link]
}

/// Newline reached: spans that may not cross a line are closed.
pub(crate) fn end_line(ctx: &mut Context<'_, '_>) {
    emphasis::end_line(ctx);
}

/// End of input: close every open span, the code span first.
pub(crate) fn end_input(ctx: &mut Context<'_, '_>) {
    code_span::close(ctx);
    emphasis::close_all(ctx);
}
