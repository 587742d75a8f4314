//! downhill: single-pass Markdown to HTML converter
//!
//! Converts a small, fixed Markdown dialect (headers, blockquotes, two-level
//! unordered lists, pipe tables, emphasis, code spans, links and images)
//! straight from source bytes to HTML.
//!
//! # Design Principles
//! - No AST: detectors write HTML as they match
//! - No backtracking: one forward pass with one line of lookahead
//! - Deferred closing: open block constructs are tracked on a tag stack and
//!   closed in reverse order, so the output is always fully closed
//! - No hidden state: everything lives in one render call
//!
//! Literal text is copied through unescaped; the dialect treats the source
//! as trusted HTML-ish text.

pub mod block;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod inline;
pub mod limits;
pub mod page;
pub mod render;
pub mod state;
pub mod tag;

// Re-export primary types
pub use error::Error;
pub use render::{HtmlWriter, IoSink, Sink};

/// How emphasis markers are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisMode {
    /// One open/closed flag flipped by every marker run.
    #[default]
    Toggle,
    /// A stack of open spans; interleaved markers still produce well-nested
    /// output, and spans close at the end of each line.
    Nested,
}

impl std::str::FromStr for EmphasisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(Self::Toggle),
            "nested" => Ok(Self::Nested),
            other => Err(format!("unknown emphasis mode `{other}` (expected toggle or nested)")),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Recognize `[text](url)` links and `![alt](url)` images.
    pub links: bool,
    /// Emphasis pairing strategy.
    pub emphasis: EmphasisMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            links: true,
            emphasis: EmphasisMode::Toggle,
        }
    }
}

/// Render Markdown bytes into `sink`.
///
/// This is the core entry point: it never fails, malformed syntax is
/// emitted as literal text, and every tag it opens is closed before it
/// returns.
///
/// # Example
/// ```
/// use downhill::{render, Options};
///
/// let mut out = Vec::new();
/// render(b"* a\n* b", &mut out, &Options::default());
/// assert_eq!(out, b"<ul><li>a\n</li><li>b</li></ul>");
/// ```
pub fn render<S: Sink>(input: &[u8], sink: &mut S, options: &Options) {
    let mut ctx = driver::Context::new(input, sink, *options);
    driver::run(&mut ctx);
}

/// Convert Markdown to an HTML fragment.
///
/// # Example
/// ```
/// let html = downhill::to_html("# Hello\n*World*");
/// assert_eq!(html, "<h1>Hello</h1>\n<i>World</i>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render(input.as_bytes(), &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    render(input.as_bytes(), out, &Options::default());
}
