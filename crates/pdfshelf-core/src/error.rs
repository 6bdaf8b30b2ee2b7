//! Error and warning types for pdfshelf.
//!
//! Provides [`ShelfError`] for failures that stop the current operation and
//! [`ExtractWarning`] for per-file problems that only degrade a record to its
//! fallback values.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal error types for cataloguing.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The directory to scan does not exist or is not a directory.
    #[error("directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// An I/O error on a specific path (stat of a scanned file, report output).
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// The path the operation was acting on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ShelfError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShelfError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A non-fatal warning: a file's metadata could not be read.
///
/// The record for the file is still produced using fallback values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractWarning {
    /// Path of the affected file.
    pub path: PathBuf,
    /// Base name of the affected file.
    pub file_name: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ExtractWarning {
    /// Create a warning for `path` with the given description.
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            file_name,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not read metadata for {}: {}",
            self.file_name, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_display() {
        let err = ShelfError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "directory '/no/such/dir' does not exist");
    }

    #[test]
    fn io_error_display_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ShelfError::io("/out/pdf_library.csv", io);
        let msg = err.to_string();
        assert!(msg.contains("/out/pdf_library.csv"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn warning_takes_file_name_from_path() {
        let w = ExtractWarning::new(Path::new("/books/broken.pdf"), "PDF parse error: bad xref");
        assert_eq!(w.file_name, "broken.pdf");
        assert_eq!(
            w.to_string(),
            "Could not read metadata for broken.pdf: PDF parse error: bad xref"
        );
    }
}
