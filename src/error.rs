//! Errors from the file collaborator.
//!
//! Rendering itself cannot fail; only reading the source and writing the
//! page can.

use std::io;
use std::path::PathBuf;

/// Error converting a Markdown file to an HTML page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Source path (`-` for stdin).
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The page could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// Destination path (`-` for stdout).
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_message() {
        let err = Error::Read {
            path: PathBuf::from("notes.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "could not read notes.md: missing");
    }

    #[test]
    fn test_write_message() {
        let err = Error::Write {
            path: PathBuf::from("out/notes.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "could not write out/notes.html: denied");
    }
}
