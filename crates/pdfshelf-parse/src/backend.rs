//! PDF metadata backend trait.
//!
//! Defines the [`MetadataBackend`] trait that abstracts how a document is
//! opened and its /Info metadata read, so the catalog can run against any
//! parser (or a test double).

use std::path::Path;

use pdfshelf_core::DocumentMetadata;

use crate::error::BackendError;

/// Trait abstracting PDF metadata extraction.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let meta = MyBackend::document_metadata(&doc)?;
/// ```
pub trait MetadataBackend {
    /// The parsed PDF document type.
    type Document;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a readable PDF document.
    fn open(bytes: &[u8]) -> Result<Self::Document, BackendError>;

    /// Read the document information dictionary.
    ///
    /// Returns `Ok(None)` when the document carries no usable /Info dictionary.
    fn document_metadata(doc: &Self::Document) -> Result<Option<DocumentMetadata>, BackendError>;

    /// Read a file and return its metadata.
    ///
    /// The file is read fully into memory and its handle released before
    /// parsing starts.
    fn read_file_metadata(path: &Path) -> Result<Option<DocumentMetadata>, BackendError> {
        let bytes = std::fs::read(path)?;
        let doc = Self::open(&bytes)?;
        Self::document_metadata(&doc)
    }
}
