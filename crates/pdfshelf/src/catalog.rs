//! The scan-and-extract pipeline.

use std::path::{Path, PathBuf};

use pdfshelf_core::{ExtractWarning, PdfRecord, ShelfError};
use pdfshelf_parse::{LopdfBackend, MetadataBackend};

use crate::extract::read_record;
use crate::scan::find_pdfs;

/// Records for every PDF under a root directory, plus per-file warnings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// The directory that was scanned.
    pub root: PathBuf,
    /// One record per file found, in scan order.
    pub records: Vec<PdfRecord>,
    /// Files whose metadata could not be read. Files that vanish between
    /// discovery and reading are skipped and only logged.
    pub warnings: Vec<ExtractWarning>,
}

impl Catalog {
    /// Scan `root` using the lopdf backend.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::DirectoryNotFound`] if `root` is not a directory.
    /// Per-file failures are collected in [`Catalog::warnings`] instead.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, ShelfError> {
        Self::scan_with::<LopdfBackend>(root, |_, _| {})
    }

    /// Scan `root` with backend `B`, calling `on_progress(current, total)`
    /// (1-indexed) before each file is read.
    pub fn scan_with<B: MetadataBackend>(
        root: impl AsRef<Path>,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Self, ShelfError> {
        let root = root.as_ref();
        let paths = find_pdfs(root)?;
        let total = paths.len();

        let mut catalog = Catalog {
            root: root.to_path_buf(),
            records: Vec::with_capacity(total),
            warnings: Vec::new(),
        };

        for (i, path) in paths.iter().enumerate() {
            on_progress(i + 1, total);
            match read_record::<B>(path) {
                Ok((record, warning)) => {
                    catalog.records.push(record);
                    catalog.warnings.extend(warning);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "file disappeared before it could be read, skipping"
                    );
                }
            }
        }

        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
