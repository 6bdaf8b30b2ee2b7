//! pdfshelf-core: Backend-independent types for cataloguing PDF files.
//!
//! This crate provides the record type produced for every scanned file,
//! the optional document metadata it is built from, output configuration
//! resolution, and the tabular and simple report serializers. It knows
//! nothing about how PDFs are parsed or how directories are walked.

pub mod config;
pub mod error;
pub mod metadata;
pub mod record;
pub mod report;

pub use config::{DEFAULT_SIMPLE_OUTPUT, DEFAULT_TABULAR_OUTPUT, OutputMode, ReportConfig};
pub use error::{ExtractWarning, ShelfError};
pub use metadata::DocumentMetadata;
pub use record::{FileStats, PdfRecord, file_stem, format_modified, size_in_mb};
pub use report::{TABULAR_HEADERS, csv_escape, simple_line, write_simple, write_tabular};
