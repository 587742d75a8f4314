//! Page skeleton and file conversion.
//!
//! Wraps a rendered fragment in the fixed HTML page and moves bytes between
//! files (or stdin/stdout for `-`) and the renderer.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Error;
use crate::render::{HtmlWriter, IoSink, Sink};
use crate::{Options, render};

const HEAD_OPEN: &str = "<html>\n<head>\n\t\t<meta charset=\"UTF-8\">\n\t\t<title>";
const HEAD_CLOSE: &str = "</title>\n<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n";
const FOOTER: &str = "\n</body>\n</html>";

/// Path that stands for stdin or stdout.
const STDIO: &str = "-";

/// Write the page head, up to and including `<body>`.
pub fn write_head<S: Sink + ?Sized>(title: &str, sink: &mut S) {
    sink.write_str(HEAD_OPEN);
    sink.write_str(&html_escape::encode_text(title));
    sink.write_str(HEAD_CLOSE);
}

/// Write the page footer.
pub fn write_footer<S: Sink + ?Sized>(sink: &mut S) {
    sink.write_str(FOOTER);
}

/// Render `input` as a complete HTML page.
///
/// # Example
/// ```
/// use downhill::{page, Options};
///
/// let html = page::render_page(b"# Hi", "hi.html", &Options::default());
/// assert!(html.starts_with("<html>\n<head>"));
/// assert!(html.contains("<title>hi.html</title>"));
/// assert!(html.ends_with("<body>\n<h1>Hi</h1>\n</body>\n</html>"));
/// ```
pub fn render_page(input: &[u8], title: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len() + HEAD_OPEN.len() + HEAD_CLOSE.len());
    write_page(input, title, options, &mut writer);
    writer.into_string()
}

fn write_page<S: Sink>(input: &[u8], title: &str, options: &Options, sink: &mut S) {
    write_head(title, sink);
    render(input, sink, options);
    write_footer(sink);
}

/// Title shown for a destination: its file name.
pub fn page_title(dst: &Path) -> Cow<'_, str> {
    match dst.file_name() {
        Some(name) => name.to_string_lossy(),
        None => dst.to_string_lossy(),
    }
}

/// Read a Markdown source, dropping a single trailing newline.
pub fn load_source(src: &Path) -> Result<Vec<u8>, Error> {
    let read_err = |source| Error::Read {
        path: src.to_path_buf(),
        source,
    };

    let mut bytes = if is_stdio(src) {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read(src).map_err(read_err)?
    };

    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    debug!(path = %src.display(), bytes = bytes.len(), "loaded source");
    Ok(bytes)
}

/// Convert the Markdown file `src` into an HTML page at `dst`.
///
/// Either path may be `-` for stdin or stdout. The page title is the file
/// name of `dst`.
pub fn convert_file(src: &Path, dst: &Path, options: &Options) -> Result<(), Error> {
    let input = load_source(src)?;
    let title = page_title(dst);

    if is_stdio(dst) {
        let stdout = io::stdout();
        write_to(&input, &title, options, stdout.lock(), dst)?;
    } else {
        let file = File::create(dst).map_err(|source| Error::Write {
            path: dst.to_path_buf(),
            source,
        })?;
        write_to(&input, &title, options, file, dst)?;
    }

    info!(src = %src.display(), dst = %dst.display(), "converted");
    Ok(())
}

fn write_to<W: Write>(
    input: &[u8],
    title: &str,
    options: &Options,
    writer: W,
    dst: &Path,
) -> Result<(), Error> {
    let mut sink = IoSink::new(BufWriter::new(writer));
    write_page(input, title, options, &mut sink);
    sink.finish().map(drop).map_err(|source| Error::Write {
        path: dst.to_path_buf(),
        source,
    })
}

#[inline]
fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}
