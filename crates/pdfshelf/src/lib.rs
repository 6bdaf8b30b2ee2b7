//! pdfshelf: Catalogue the PDF files under a directory.
//!
//! This is the public API facade crate for pdfshelf. It re-exports types from
//! pdfshelf-core and uses pdfshelf-parse for reading document metadata.
//!
//! # Architecture
//!
//! - **pdfshelf-core**: Records, configuration, and report serializers
//! - **pdfshelf-parse**: PDF metadata backends
//! - **pdfshelf** (this crate): Directory scanning, per-file extraction with
//!   fallback, and report output
//!
//! # Example
//!
//! ```no_run
//! use pdfshelf::{Catalog, ReportConfig, write_report};
//!
//! let catalog = Catalog::scan("./books")?;
//! write_report(&catalog.records, &ReportConfig::default())?;
//! # Ok::<(), pdfshelf::ShelfError>(())
//! ```

mod catalog;
mod extract;
mod output;
mod scan;
#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use extract::{read_file_stats, read_record};
pub use output::{ReportOutcome, write_report};
pub use scan::{find_pdfs, is_pdf_path};

pub use pdfshelf_core;
pub use pdfshelf_core::{
    DocumentMetadata, ExtractWarning, FileStats, OutputMode, PdfRecord, ReportConfig, ShelfError,
};
pub use pdfshelf_parse;
pub use pdfshelf_parse::{BackendError, LopdfBackend, MetadataBackend};
