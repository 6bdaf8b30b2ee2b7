//! pdfshelf-parse: PDF metadata backends.
//!
//! Defines the [`MetadataBackend`] trait and the lopdf-based default
//! implementation. All binary-format interpretation is delegated to lopdf;
//! this crate only locates and decodes the /Info dictionary entries.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::MetadataBackend;
pub use error::BackendError;
pub use lopdf_backend::LopdfBackend;
pub use pdfshelf_core;
