//! Offset-based cursor with a one-line lookahead model.
//!
//! The cursor never hands out raw pointers: every lookahead goes through a
//! bounds-checked accessor, so peeking past the end of the buffer yields
//! `None` instead of reading whatever follows the input.

/// A cursor over an immutable source buffer.
///
/// Besides the scan offset it tracks the facts the detectors need at a line
/// start: where the current line ends, whether another line follows, and the
/// last byte consumed.
///
/// # Example
/// ```
/// use downhill::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"Title\n=====");
/// cursor.locate_line_end();
/// assert_eq!(cursor.line_rest(), b"Title");
/// assert_eq!(cursor.next_line(), Some(&b"====="[..]));
/// cursor.advance(2);
/// assert_eq!(cursor.peek(), Some(b't'));
/// assert_eq!(cursor.prev(), Some(b'i'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line_end: usize,
    line_last: bool,
    prev: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line_end: 0,
            line_last: false,
            prev: None,
        }
    }

    /// The whole source buffer.
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The last byte consumed, `None` before the first advance.
    #[inline]
    pub fn prev(&self) -> Option<u8> {
        self.prev
    }

    /// True when the cursor sits on the first byte of a line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        matches!(self.prev, None | Some(b'\n'))
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes, clamped to the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let target = self.pos.saturating_add(n).min(self.input.len());
        if target > self.pos {
            self.prev = Some(self.input[target - 1]);
            self.pos = target;
        }
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Count leading bytes of the current line matching the predicate.
    #[inline]
    pub fn count_while<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        self.line_rest().iter().take_while(|&&b| predicate(b)).count()
    }

    /// Skip spaces and tabs on the current line.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let n = self.count_while(|b| b == b' ' || b == b'\t');
        self.advance(n);
        n
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Find the next newline relative to the cursor.
    #[inline]
    pub fn find_newline(&self) -> Option<usize> {
        memchr::memchr(b'\n', self.remaining_slice())
    }

    /// Recompute the line facts from the current offset.
    ///
    /// Must run once per line, on its first byte, before any detector.
    pub fn locate_line_end(&mut self) {
        match self.find_newline() {
            Some(rel) => {
                self.line_end = self.pos + rel;
                self.line_last = self.line_end + 1 >= self.input.len();
            }
            None => {
                self.line_end = self.input.len();
                self.line_last = true;
            }
        }
    }

    /// Offset of the current line's newline (or the end of input).
    #[inline]
    pub fn line_end(&self) -> usize {
        self.line_end
    }

    /// True when no line follows the current one.
    #[inline]
    pub fn line_last(&self) -> bool {
        self.line_last
    }

    /// Bytes from the cursor up to (not including) the line's newline.
    #[inline]
    pub fn line_rest(&self) -> &'a [u8] {
        let end = self.line_end.max(self.pos).min(self.input.len());
        &self.input[self.pos..end]
    }

    /// The line following the current one, without its newline.
    pub fn next_line(&self) -> Option<&'a [u8]> {
        if self.line_last {
            return None;
        }
        let start = self.line_end + 1;
        let rest = self.input.get(start..)?;
        let len = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        Some(&rest[..len])
    }

    /// Jump past the current line, including its newline.
    #[inline]
    pub fn skip_line(&mut self) {
        let target = self.line_end.saturating_add(1);
        self.advance(target.saturating_sub(self.pos));
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.pos)
            .field("remaining", &self.remaining())
            .field("line_end", &self.line_end)
            .field("line_last", &self.line_last)
            .finish()
    }
}
