//! Byte sinks the renderer writes HTML into.
//!
//! [`Sink`] is the only output abstraction the scanner knows about. Writes
//! never fail: [`HtmlWriter`] grows an in-memory buffer, and
//! [`IoSink`] latches the first I/O error for the caller to collect once the
//! render is done.

use std::io;

/// Destination for rendered HTML bytes.
///
/// Only [`write_bytes`](Sink::write_bytes) is required; the tag helpers are
/// built on top of it.
pub trait Sink {
    /// Write raw bytes without escaping.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Write a static string.
    #[inline]
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.write_bytes(&[b]);
    }

    /// Write a newline.
    #[inline]
    fn newline(&mut self) {
        self.write_byte(b'\n');
    }

    /// Write opening tag: `<tagname>`
    #[inline]
    fn open_tag(&mut self, tag: &str) {
        self.write_byte(b'<');
        self.write_str(tag);
        self.write_byte(b'>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    fn close_tag(&mut self, tag: &str) {
        self.write_str("</");
        self.write_str(tag);
        self.write_byte(b'>');
    }

    /// Write self-closing tag: `<tagname />`
    #[inline]
    fn self_closing_tag(&mut self, tag: &str) {
        self.write_byte(b'<');
        self.write_str(tag);
        self.write_str(" />");
    }

    /// Write heading start: `<hN>`
    #[inline]
    fn heading_start(&mut self, tier: u8) {
        self.write_str("<h");
        self.write_u32(u32::from(tier));
        self.write_byte(b'>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    fn heading_end(&mut self, tier: u8) {
        self.write_str("</h");
        self.write_u32(u32::from(tier));
        self.write_byte(b'>');
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.write_byte(b'0');
            return;
        }

        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        self.write_bytes(&buf[i..]);
    }
}

/// In-memory HTML writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use downhill::{HtmlWriter, Sink};
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.open_tag("p");
/// writer.write_str("Hello");
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        let capacity = input_len + input_len / 4;
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership as String.
    ///
    /// Literal content is copied through unchanged, so invalid UTF-8 in the
    /// source is replaced with U+FFFD here.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for HtmlWriter {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Adapter streaming into any [`io::Write`].
///
/// The first failed write is kept and every later write is dropped;
/// [`finish`](IoSink::finish) flushes and reports it.
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// True once a write has failed.
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush the writer and return it, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.inner.write_all(bytes) {
            self.error = Some(err);
        }
    }
}
