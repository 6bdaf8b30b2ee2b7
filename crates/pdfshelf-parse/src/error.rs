//! Error types for the metadata backend layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Error type for PDF metadata backend operations.
///
/// Every variant is recoverable at the catalog level: the affected file is
/// recorded with fallback values.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF is encrypted and its metadata cannot be read without a password.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,
}

impl From<lopdf::Error> for BackendError {
    fn from(err: lopdf::Error) -> Self {
        BackendError::Parse(format!("failed to parse PDF: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_parse() {
        let err = BackendError::Parse("invalid xref table".to_string());
        assert_eq!(err.to_string(), "PDF parse error: invalid xref table");
    }

    #[test]
    fn backend_error_io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BackendError = io_err.into();
        assert!(matches!(err, BackendError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn backend_error_password_required() {
        assert_eq!(
            BackendError::PasswordRequired.to_string(),
            "PDF is encrypted and requires a password"
        );
    }

    #[test]
    fn backend_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BackendError::Parse("test".to_string()));
        assert!(err.to_string().contains("test"));
    }
}
