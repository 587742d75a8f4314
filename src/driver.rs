//! Render driver: the single forward pass over the source.
//!
//! Each line goes through two phases. At its first byte the block rules run
//! in priority order; then every byte up to the newline is offered to the
//! inline rules and emitted literally when none of them consumes it. At the
//! newline the line-scoped tags (headers, table rows and cells) are closed.
//! At end of input every pending tag is flushed.

use tracing::{debug, trace};

use crate::block::{self, BlockRule};
use crate::cursor::Cursor;
use crate::inline::{self, InlineRule};
use crate::render::Sink;
use crate::state::ParseState;
use crate::tag::{Tag, TagEntry, TagStack};
use crate::Options;

/// Everything a detector may look at or change while scanning.
pub struct Context<'a, 's> {
    pub cursor: Cursor<'a>,
    pub state: ParseState,
    pub stack: TagStack,
    pub options: Options,
    /// Offset of the first byte of the current line.
    pub line_start: usize,
    sink: &'s mut dyn Sink,
}

impl<'a, 's> Context<'a, 's> {
    pub fn new(input: &'a [u8], sink: &'s mut dyn Sink, options: Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: ParseState::new(),
            stack: TagStack::new(),
            options,
            line_start: 0,
            sink,
        }
    }

    /// The output sink.
    #[inline]
    pub fn sink(&mut self) -> &mut dyn Sink {
        &mut *self.sink
    }

    /// Write bytes straight to the output.
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.sink.write_bytes(bytes);
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.sink.write_str(s);
    }

    /// Pop and emit the top stack entry, keeping the state in step.
    pub fn pop(&mut self) -> Option<TagEntry> {
        let entry = self.stack.pop(&mut *self.sink)?;
        self.state.apply(entry);
        Some(entry)
    }

    /// Emit the opening form of `tag` and queue its close.
    pub fn open(&mut self, tag: Tag) {
        self.stack.add(tag);
        self.pop();
    }

    /// Emit a tag that has no closing obligation (`<br />`).
    pub fn emit_once(&mut self, tag: Tag) {
        self.stack.push(tag, false);
        self.pop();
    }

    /// Pop entries up to and including the pending close of `tag`.
    ///
    /// Does nothing when no close of `tag` is queued.
    pub fn close_through(&mut self, tag: Tag) {
        if !self.stack.contains_close(tag) {
            return;
        }
        while let Some(entry) = self.pop() {
            if entry == TagEntry::close(tag) {
                break;
            }
        }
    }

    /// Pop entries while `pred` holds for the state.
    pub fn close_while(&mut self, pred: impl Fn(&ParseState) -> bool) {
        while pred(&self.state) {
            if self.pop().is_none() {
                break;
            }
        }
    }

    /// Close every open block construct.
    pub fn close_all(&mut self) {
        let state = &mut self.state;
        self.stack.flush_with(&mut *self.sink, |entry| state.apply(entry));
    }

    /// Close what the current line opened. Returns true when a table row
    /// ended, whose `</tr>` already terminates the output line.
    pub fn end_line(&mut self) -> bool {
        inline::end_line(self);
        let mut row_closed = false;
        while let Some(top) = self.stack.top() {
            if !(top.close && top.tag.is_line_scoped()) {
                break;
            }
            self.pop();
            row_closed |= top.tag == Tag::Tr;
        }
        row_closed
    }

    /// End of input: close open spans and flush the stack.
    pub fn finish(&mut self) {
        inline::end_input(self);
        self.close_all();
    }
}

/// Run the scan over the whole input.
pub fn run(ctx: &mut Context<'_, '_>) {
    let block_rules: [&dyn BlockRule; 5] = block::rules();
    let inline_rules: [&dyn InlineRule; 5] = inline::rules();
    let mut lines = 0usize;

    while !ctx.cursor.is_eof() {
        if ctx.cursor.at_line_start() {
            ctx.cursor.locate_line_end();
            ctx.line_start = ctx.cursor.offset();
            lines += 1;

            if ctx.state.skip_rest_of_line {
                ctx.state.skip_rest_of_line = false;
                trace!(line = lines, "skipping line");
                ctx.cursor.skip_line();
                continue;
            }

            for rule in &block_rules {
                if rule.try_match(ctx) {
                    trace!(line = lines, rule = rule.name(), "block rule claimed line");
                    break;
                }
            }
        }

        scan_line(ctx, &inline_rules);
    }

    ctx.finish();
    debug!(bytes = ctx.cursor.input().len(), lines, "render finished");
}

/// Scan the rest of the current line, including its newline.
fn scan_line(ctx: &mut Context<'_, '_>, rules: &[&dyn InlineRule]) {
    while let Some(b) = ctx.cursor.peek() {
        if b == b'\n' {
            if !ctx.end_line() {
                ctx.sink.newline();
            }
            ctx.cursor.bump();
            return;
        }

        if !rules.iter().any(|rule| rule.try_match(ctx)) {
            ctx.sink.write_byte(b);
            ctx.cursor.bump();
        }
    }
}
